use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate assessment id: {0}")]
    DuplicateId(String),

    #[error("Malformed catalogue item: {0}")]
    MalformedItem(String),

    #[error("Query text is empty")]
    EmptyQuery,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Explanation provider error: {0}")]
    ExplanationProvider(String),

    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::DuplicateId(id) => {
                tracing::error!("Duplicate assessment id in catalogue: {id}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DUPLICATE_ID",
                    format!("Duplicate assessment id: {id}"),
                )
            }
            AppError::MalformedItem(msg) => {
                tracing::error!("Malformed catalogue item: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "MALFORMED_ITEM",
                    format!("Malformed catalogue item: {msg}"),
                )
            }
            AppError::EmptyQuery => (
                StatusCode::BAD_REQUEST,
                "EMPTY_QUERY",
                "Query text is empty".to_string(),
            ),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::ExplanationProvider(msg) => {
                tracing::error!("Explanation provider error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "EXPLANATION_PROVIDER_ERROR",
                    "The explanation provider failed to produce a response".to_string(),
                )
            }
            AppError::Fetch(msg) => {
                tracing::error!("Fetch error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "FETCH_ERROR",
                    format!("Could not fetch text: {msg}"),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
