use mongodb::bson::{Document, doc};
use mongodb::{Client, Collection};
use tracing::info;

use crate::config::AppConfig;
use crate::core::error::AppError;

pub const LESSONS_COLLECTION: &str = "lessons";
pub const ORDERS_COLLECTION: &str = "orders";

/// Collection handles for one connected database. Cloning is cheap; the
/// driver pools connections behind the shared client.
#[derive(Clone)]
pub struct MongoDatabase {
    lessons: Collection<Document>,
    orders: Collection<Document>,
}

impl MongoDatabase {
    pub async fn connect(config: &AppConfig) -> Result<Self, AppError> {
        let client = Client::with_uri_str(&config.mongodb_uri)
            .await
            .map_err(|err| {
                AppError::database(format!("failed to create MongoDB client: {err}"))
            })?;

        let database = client.database(&config.database_name);

        // with_uri_str is lazy; ping so an unreachable server fails startup
        database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|err| AppError::database(format!("failed to reach MongoDB: {err}")))?;

        info!(database = %config.database_name, "MongoDB connection successful");

        Ok(Self {
            lessons: database.collection(LESSONS_COLLECTION),
            orders: database.collection(ORDERS_COLLECTION),
        })
    }

    pub fn lessons(&self) -> &Collection<Document> {
        &self.lessons
    }

    pub fn orders(&self) -> &Collection<Document> {
        &self.orders
    }
}
