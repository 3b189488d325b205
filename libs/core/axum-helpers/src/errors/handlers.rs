use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::response::ApiMessage;

/// Fallback handler for unmatched routes.
pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ApiMessage::failure("Endpoint not found")),
    )
        .into_response()
}
