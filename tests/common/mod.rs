#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::{Body, Bytes};
use axum::http::{HeaderMap, Method, Request, StatusCode, header};
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{Bson, Document, doc};
use regex::RegexBuilder;
use serde_json::Value;
use tokio::sync::Mutex;
use tower::ServiceExt;

use webstore_api::config::SearchMode;
use webstore_api::core::error::AppError;
use webstore_api::features::lessons::{LessonStore, UpdateOutcome};
use webstore_api::features::orders::OrderStore;
use webstore_api::server::{AppState, build_router};

/// Behaves like the two MongoDB collections closely enough for the routes:
/// insertion order is kept, `_id` is generated on insert and search applies
/// the same field rules as the real filter.
#[derive(Default)]
pub struct InMemoryStore {
    lessons: Mutex<Vec<Document>>,
    orders: Mutex<Vec<Document>>,
}

impl InMemoryStore {
    pub fn with_lessons(lessons: Vec<Document>) -> Arc<Self> {
        Arc::new(Self {
            lessons: Mutex::new(lessons),
            orders: Mutex::new(Vec::new()),
        })
    }

    pub async fn lessons(&self) -> Vec<Document> {
        self.lessons.lock().await.clone()
    }

    pub async fn orders(&self) -> Vec<Document> {
        self.orders.lock().await.clone()
    }
}

fn matches_id(document: &Document, id: &Bson) -> bool {
    match (document.get("id"), id) {
        (None, Bson::Null) => true,
        (Some(stored), wanted) => stored == wanted,
        (None, _) => false,
    }
}

fn numeric_string_form(value: Option<&Bson>) -> Option<String> {
    match value? {
        Bson::Int32(number) => Some(number.to_string()),
        Bson::Int64(number) => Some(number.to_string()),
        Bson::Double(number) if number.fract() == 0.0 => Some(format!("{}", *number as i64)),
        Bson::Double(number) => Some(number.to_string()),
        Bson::String(text) => Some(text.clone()),
        _ => None,
    }
}

#[async_trait]
impl LessonStore for InMemoryStore {
    async fn find_all(&self) -> Result<Vec<Document>, AppError> {
        Ok(self.lessons.lock().await.clone())
    }

    async fn search(&self, pattern: &str) -> Result<Vec<Document>, AppError> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|err| AppError::database(format!("invalid regular expression: {err}")))?;

        let guard = self.lessons.lock().await;
        Ok(guard
            .iter()
            .filter(|lesson| {
                let text_hit = ["topic", "location"].iter().any(|field| {
                    lesson
                        .get_str(field)
                        .map(|value| regex.is_match(value))
                        .unwrap_or(false)
                });
                let numeric_hit = ["price", "space"].iter().any(|field| {
                    numeric_string_form(lesson.get(field))
                        .map(|value| regex.is_match(&value))
                        .unwrap_or(false)
                });
                text_hit || numeric_hit
            })
            .cloned()
            .collect())
    }

    async fn update_by_id(&self, id: Bson, fields: Document) -> Result<UpdateOutcome, AppError> {
        let mut guard = self.lessons.lock().await;
        let Some(lesson) = guard.iter_mut().find(|lesson| matches_id(lesson, &id)) else {
            return Ok(UpdateOutcome::default());
        };

        let mut modified = false;
        for (key, value) in fields {
            if lesson.get(&key) != Some(&value) {
                lesson.insert(key, value);
                modified = true;
            }
        }

        Ok(UpdateOutcome {
            matched: 1,
            modified: u64::from(modified),
        })
    }
}

#[async_trait]
impl OrderStore for InMemoryStore {
    async fn find_all(&self) -> Result<Vec<Document>, AppError> {
        Ok(self.orders.lock().await.clone())
    }

    async fn insert(&self, order: Document) -> Result<Bson, AppError> {
        let mut stored = order;
        let id = match stored.get("_id") {
            Some(existing) => existing.clone(),
            None => {
                let generated = Bson::ObjectId(ObjectId::new());
                let mut with_id = doc! { "_id": generated.clone() };
                with_id.extend(stored);
                stored = with_id;
                generated
            }
        };

        self.orders.lock().await.push(stored);
        Ok(id)
    }
}

/// Every call fails as if the database were unreachable.
pub struct FailingStore;

fn unreachable_database() -> AppError {
    AppError::database("connection refused".to_string())
}

#[async_trait]
impl LessonStore for FailingStore {
    async fn find_all(&self) -> Result<Vec<Document>, AppError> {
        Err(unreachable_database())
    }

    async fn search(&self, _pattern: &str) -> Result<Vec<Document>, AppError> {
        Err(unreachable_database())
    }

    async fn update_by_id(&self, _id: Bson, _fields: Document) -> Result<UpdateOutcome, AppError> {
        Err(unreachable_database())
    }
}

#[async_trait]
impl OrderStore for FailingStore {
    async fn find_all(&self) -> Result<Vec<Document>, AppError> {
        Err(unreachable_database())
    }

    async fn insert(&self, _order: Document) -> Result<Bson, AppError> {
        Err(unreachable_database())
    }
}

pub fn sample_lessons() -> Vec<Document> {
    vec![
        doc! { "_id": ObjectId::new(), "id": "L1", "topic": "Math", "location": "London", "price": 100, "space": 5 },
        doc! { "_id": ObjectId::new(), "id": "L2", "topic": "English", "location": "Oxford", "price": 80, "space": 10 },
        doc! { "_id": ObjectId::new(), "id": "L3", "topic": "Music", "location": "Hendon", "price": 95, "space": 0 },
        doc! { "_id": ObjectId::new(), "id": "L4", "topic": "Colonial History", "location": "Bristol", "price": 55.5, "space": 3 },
    ]
}

pub fn app_with_store(store: Arc<InMemoryStore>, mode: SearchMode) -> Router {
    app_with_images(store, mode, Path::new("does-not-exist"))
}

pub fn app_with_images(store: Arc<InMemoryStore>, mode: SearchMode, images_dir: &Path) -> Router {
    let state = AppState::from_stores(store.clone(), store, mode);
    build_router(state, images_dir)
}

pub fn failing_app() -> Router {
    let store = Arc::new(FailingStore);
    let state = AppState::from_stores(store.clone(), store, SearchMode::Literal);
    build_router(state, Path::new("does-not-exist"))
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

pub fn json_request(method: Method, uri: &str, body: &Value) -> Request<Body> {
    raw_json_request(method, uri, body.to_string())
}

pub fn raw_json_request(method: Method, uri: &str, body: String) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .expect("request")
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, HeaderMap, Bytes) {
    let response = app.clone().oneshot(request).await.expect("router is infallible");
    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("response body");
    (status, headers, body)
}

pub async fn send_json(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let (status, _, body) = send(app, request).await;
    let value = serde_json::from_slice(&body).expect("json response body");
    (status, value)
}

pub fn ids(lessons: &Value) -> Vec<String> {
    lessons
        .as_array()
        .expect("json array")
        .iter()
        .map(|lesson| lesson["id"].as_str().unwrap_or_default().to_string())
        .collect()
}
