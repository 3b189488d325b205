//! Application state management.
//!
//! The shared state passed to request handlers. It holds the loaded
//! configuration and the PostgreSQL connection pool; cloning it only
//! clones Arc handles.

use sea_orm::DatabaseConnection;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// PostgreSQL database connection pool
    pub db: DatabaseConnection,
}
