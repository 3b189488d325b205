//! # Axum Helpers
//!
//! A collection of utilities and helpers for building Axum web applications.
//!
//! ## Modules
//!
//! - **[`response`]**: the uniform `{success, data, message, error, count}`
//!   response envelope used by every endpoint
//! - **[`errors`]**: `AppError` and its conversion to envelope responses
//! - **[`extractors`]**: custom extractors (integer id path, validated JSON,
//!   envelope-rejecting query)
//! - **[`http`]**: CORS layers
//! - **[`server`]**: router composition, server bootstrap, graceful shutdown

pub mod errors;
pub mod extractors;
pub mod http;
pub mod response;
pub mod server;

// Re-export response envelope types
pub use response::{ApiMessage, ApiResponse};

// Re-export error types
pub use errors::{AppError, ErrorBody};

// Re-export extractors
pub use extractors::{IdPath, ValidatedJson, ValidatedQuery};

// Re-export HTTP middleware
pub use http::{create_cors_layer, create_permissive_cors_layer};

// Re-export server helpers
pub use server::{create_app, create_router, shutdown_signal};
