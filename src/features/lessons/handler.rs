use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use serde_json::Value;

use crate::core::error::{ApiFailure, AppError};
use crate::features::lessons::dto::{SearchParams, UpdateLessonResponse};
use crate::server::AppState;

pub const FETCH_LESSONS_FAILED: &str = "Error Code 500. Could not fetch lessons";
pub const UPDATE_LESSON_FAILED: &str = "Updation for lesson was failed";
pub const SEARCH_FAILED: &str = "Search query operation was failed.";
pub const LESSON_UPDATED: &str = "Lesson was successfully updated";

pub async fn handle_list_lessons(
    State(state): State<AppState>,
) -> Result<Json<Vec<Value>>, ApiFailure> {
    let lessons = state
        .lessons
        .list_lessons()
        .await
        .map_err(|err| ApiFailure::new(FETCH_LESSONS_FAILED, err))?;

    Ok(Json(lessons))
}

pub async fn handle_update_lesson(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<UpdateLessonResponse>, ApiFailure> {
    let Json(payload) = payload.map_err(|rejection| {
        ApiFailure::new(
            UPDATE_LESSON_FAILED,
            AppError::invalid_document(rejection.body_text()),
        )
    })?;

    state
        .lessons
        .update_lesson(payload)
        .await
        .map_err(|err| ApiFailure::new(UPDATE_LESSON_FAILED, err))?;

    Ok(Json(UpdateLessonResponse {
        message: LESSON_UPDATED.to_string(),
    }))
}

pub async fn handle_search_lessons(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<Vec<Value>>, ApiFailure> {
    let Query(pairs) = query.map_err(|rejection| {
        ApiFailure::new(SEARCH_FAILED, AppError::internal(rejection.body_text()))
    })?;
    let params = SearchParams::from_pairs(pairs);

    let lessons = state
        .lessons
        .search_lessons(params.search_query.as_deref())
        .await
        .map_err(|err| ApiFailure::new(SEARCH_FAILED, err))?;

    Ok(Json(lessons))
}
