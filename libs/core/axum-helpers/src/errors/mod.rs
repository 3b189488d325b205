pub mod handlers;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use core_config::Environment;
use sea_orm::DbErr;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Error response body.
///
/// Mirrors the success envelope shape with `success: false`. The optional
/// `error` field carries raw error detail and is only populated in
/// development; production responses stay at the generic message.
///
/// # JSON Example
///
/// ```json
/// {
///   "success": false,
///   "message": "Internal server error",
///   "error": "connection refused"
/// }
/// ```
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            error: None,
        }
    }

    pub fn with_detail(message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            error: Some(detail.into()),
        }
    }
}

/// Application error type that converts to envelope-shaped HTTP responses.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("Internal Server Error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::BadRequest(msg) => {
                tracing::info!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, ErrorBody::new(msg))
            }
            AppError::NotFound(msg) => {
                tracing::info!("Not found: {}", msg);
                (StatusCode::NOT_FOUND, ErrorBody::new(msg))
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    internal_body(e.to_string()),
                )
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal server error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, internal_body(msg))
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Generic 500 body; raw detail is attached only outside production.
fn internal_body(detail: String) -> ErrorBody {
    if Environment::from_env().is_development() {
        ErrorBody::with_detail("Internal server error", detail)
    } else {
        ErrorBody::new("Internal server error")
    }
}
