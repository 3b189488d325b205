use axum::{Router, routing::get};
use domain_products::{PgProductRepository, ProductService};

use crate::state::AppState;

pub mod health;

/// Creates the API routes without the `/api` prefix.
/// The `/api` prefix is added by the `create_router` helper.
///
/// Domain sub-routers have their state applied here, so the returned
/// router is stateless and ready to be composed with middleware.
pub fn routes(state: &AppState) -> Router {
    let products = ProductService::new(PgProductRepository::new(state.db.clone()));

    Router::new()
        .nest("/products", domain_products::handlers::router(products))
        .route("/health", get(health::health).with_state(state.clone()))
}
