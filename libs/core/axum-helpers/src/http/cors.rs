use axum::http::Method;
use std::time::Duration;
use tower_http::cors::CorsLayer;

/// Creates a CORS layer restricted to a single origin.
///
/// # Returns
/// A configured `CorsLayer` with:
/// - Specified allowed origin
/// - Common HTTP methods (GET, POST, PUT, DELETE, OPTIONS)
/// - Content-Type and Accept headers
/// - 1 hour max age
pub fn create_cors_layer(allowed_origin: axum::http::HeaderValue) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(allowed_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
        ])
        .max_age(Duration::from_secs(3600))
}

/// Creates a permissive CORS layer.
///
/// Allows any origin. Suitable for public read-mostly APIs and local
/// development.
pub fn create_permissive_cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}
