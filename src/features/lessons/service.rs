use std::sync::Arc;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{Bson, Document, doc};
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::SearchMode;
use crate::core::database::MongoDatabase;
use crate::core::document::{documents_to_json, json_to_document};
use crate::core::error::AppError;
use crate::features::lessons::helpers::{
    build_search_filter, prepare_pattern, split_lesson_update,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateOutcome {
    pub matched: u64,
    pub modified: u64,
}

#[async_trait]
pub trait LessonStore: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Document>, AppError>;
    /// `pattern` is already a regex; the store matches it case-insensitively.
    async fn search(&self, pattern: &str) -> Result<Vec<Document>, AppError>;
    async fn update_by_id(&self, id: Bson, fields: Document) -> Result<UpdateOutcome, AppError>;
}

#[async_trait]
impl LessonStore for MongoDatabase {
    async fn find_all(&self) -> Result<Vec<Document>, AppError> {
        let cursor = self
            .lessons()
            .find(doc! {})
            .await
            .map_err(|err| AppError::database(format!("failed to query lessons: {err}")))?;

        cursor
            .try_collect::<Vec<Document>>()
            .await
            .map_err(|err| AppError::database(format!("failed to read lessons: {err}")))
    }

    async fn search(&self, pattern: &str) -> Result<Vec<Document>, AppError> {
        let cursor = self
            .lessons()
            .find(build_search_filter(pattern))
            .await
            .map_err(|err| AppError::database(format!("failed to search lessons: {err}")))?;

        cursor
            .try_collect::<Vec<Document>>()
            .await
            .map_err(|err| {
                AppError::database(format!("failed to read search results: {err}"))
            })
    }

    async fn update_by_id(&self, id: Bson, fields: Document) -> Result<UpdateOutcome, AppError> {
        let result = self
            .lessons()
            .update_one(doc! { "id": id }, doc! { "$set": fields })
            .await
            .map_err(|err| AppError::database(format!("failed to update lesson: {err}")))?;

        Ok(UpdateOutcome {
            matched: result.matched_count,
            modified: result.modified_count,
        })
    }
}

pub struct LessonService {
    store: Arc<dyn LessonStore>,
    search_mode: SearchMode,
}

impl LessonService {
    pub fn new(store: Arc<dyn LessonStore>, search_mode: SearchMode) -> Self {
        Self { store, search_mode }
    }

    pub async fn list_lessons(&self) -> Result<Vec<Value>, AppError> {
        let lessons = self.store.find_all().await?;
        Ok(documents_to_json(lessons))
    }

    /// An empty or missing query lists every lesson. The query is not trimmed.
    pub async fn search_lessons(&self, query: Option<&str>) -> Result<Vec<Value>, AppError> {
        let query = query.unwrap_or_default();
        if query.is_empty() {
            return self.list_lessons().await;
        }

        let pattern = prepare_pattern(query, self.search_mode);
        debug!(%pattern, mode = ?self.search_mode, "searching lessons");

        let lessons = self.store.search(&pattern).await?;
        Ok(documents_to_json(lessons))
    }

    /// Sets every field of `payload` except `id` and `_id` on the lesson whose
    /// `id` matches. Zero matches is not an error.
    pub async fn update_lesson(&self, payload: Value) -> Result<UpdateOutcome, AppError> {
        let (id, fields) = split_lesson_update(json_to_document(payload)?);

        let outcome = self.store.update_by_id(id.clone(), fields).await?;
        if outcome.matched == 0 {
            warn!(%id, "lesson update matched no documents");
        }

        Ok(outcome)
    }
}
