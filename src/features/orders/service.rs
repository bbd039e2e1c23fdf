use std::sync::Arc;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{Bson, Document, doc};
use serde_json::Value;
use tracing::info;

use crate::core::database::MongoDatabase;
use crate::core::document::{bson_to_json, documents_to_json, json_to_document};
use crate::core::error::AppError;

#[async_trait]
pub trait OrderStore: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Document>, AppError>;
    /// Returns the `_id` the stored document ended up with.
    async fn insert(&self, order: Document) -> Result<Bson, AppError>;
}

#[async_trait]
impl OrderStore for MongoDatabase {
    async fn find_all(&self) -> Result<Vec<Document>, AppError> {
        let cursor = self
            .orders()
            .find(doc! {})
            .await
            .map_err(|err| AppError::database(format!("failed to query orders: {err}")))?;

        cursor
            .try_collect::<Vec<Document>>()
            .await
            .map_err(|err| AppError::database(format!("failed to read orders: {err}")))
    }

    async fn insert(&self, order: Document) -> Result<Bson, AppError> {
        let result = self
            .orders()
            .insert_one(order)
            .await
            .map_err(|err| AppError::database(format!("failed to insert order: {err}")))?;

        Ok(result.inserted_id)
    }
}

pub struct OrderService {
    store: Arc<dyn OrderStore>,
}

impl OrderService {
    pub fn new(store: Arc<dyn OrderStore>) -> Self {
        Self { store }
    }

    pub async fn list_orders(&self) -> Result<Vec<Value>, AppError> {
        let orders = self.store.find_all().await?;
        Ok(documents_to_json(orders))
    }

    /// Stores the payload unchanged and returns the new order's id as JSON.
    pub async fn create_order(&self, payload: Value) -> Result<Value, AppError> {
        let order = json_to_document(payload)?;
        let inserted_id = self.store.insert(order).await?;
        info!(order_id = %inserted_id, "order created");

        Ok(bson_to_json(inserted_id))
    }
}
