use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("database error: {0}")]
    Database(String),
    #[error("invalid document: {0}")]
    InvalidDocument(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn configuration(message: String) -> Self {
        Self::Configuration(message)
    }

    pub fn database(message: String) -> Self {
        Self::Database(message)
    }

    pub fn invalid_document(message: String) -> Self {
        Self::InvalidDocument(message)
    }

    pub fn internal(message: String) -> Self {
        Self::Internal(message)
    }
}

/// A failed request as seen by the client: always a 500 carrying a fixed,
/// route-specific message. The underlying cause is only written to the log.
#[derive(Debug)]
pub struct ApiFailure {
    message: &'static str,
    source: AppError,
}

impl ApiFailure {
    pub fn new(message: &'static str, source: AppError) -> Self {
        Self { message, source }
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: &'static str,
}

impl IntoResponse for ApiFailure {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.source, "{}", self.message);

        let body = Json(ErrorResponse {
            error: self.message,
        });

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
