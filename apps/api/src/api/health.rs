//! Health check endpoint backed by a real database round trip.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_helpers::errors::ErrorBody;
use serde::Serialize;
use utoipa::ToSchema;

use crate::state::AppState;

const TAG: &str = "health";

/// Body returned when the service and its database are reachable.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub success: bool,
    pub message: String,
    /// ISO-8601 timestamp of the check
    pub timestamp: String,
}

/// Check service and database health
///
/// Runs `SELECT 1` against the connection pool. A failing database turns
/// this endpoint into a 500 so load balancers stop routing traffic here.
#[utoipa::path(
    get,
    path = "/health",
    tag = TAG,
    responses(
        (status = 200, description = "Server and database are healthy", body = HealthResponse),
        (status = 500, description = "Database is unreachable")
    )
)]
pub async fn health(State(state): State<AppState>) -> Response {
    let timestamp = chrono::Utc::now().to_rfc3339();

    match database::postgres::check_health(&state.db).await {
        Ok(()) => Json(HealthResponse {
            success: true,
            message: "Server and database are healthy".to_string(),
            timestamp,
        })
        .into_response(),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);

            let body = if state.config.environment.is_development() {
                ErrorBody::with_detail("Database connection failed", e.to_string())
            } else {
                ErrorBody::new("Database connection failed")
            };

            (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
        }
    }
}
