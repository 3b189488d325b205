//! HTTP middleware module.
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::http::create_permissive_cors_layer;
//!
//! let app = Router::new().layer(create_permissive_cors_layer());
//! ```

pub mod cors;

pub use cors::{create_cors_layer, create_permissive_cors_layer};
