use axum_helpers::server::{create_app, create_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing with ErrorLayer for span trace capture
    init_tracing(&config.environment);

    // Connect with retry so a slow-starting database does not kill the service
    let db = database::postgres::connect_from_config_with_retry(config.database.clone(), None)
        .await
        .map_err(|e| eyre::eyre!("PostgreSQL connection failed: {}", e))?;

    database::postgres::run_migrations::<migration::Migrator>(&db, config.app.name)
        .await
        .map_err(|e| eyre::eyre!("Migration failed: {}", e))?;

    let state = AppState { config, db };

    // Build router with API routes (pass reference, not ownership!)
    let api_routes = api::routes(&state);

    // create_router adds docs/middleware to our composed routes
    let router = create_router::<openapi::ApiDoc>(api_routes);

    info!(
        "{} v{} starting. Endpoints: \
         GET /api/products, GET /api/products/live, GET /api/products/{{id}}, \
         POST /api/products, PUT /api/products/{{id}}, DELETE /api/products/{{id}}, \
         POST /api/products/{{id}}/restore, GET /api/health",
        state.config.app.name, state.config.app.version
    );

    create_app(router, &state.config.server)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Shutting down: closing database connection");
    match state.db.close().await {
        Ok(_) => info!("PostgreSQL connection closed successfully"),
        Err(e) => tracing::error!("Error closing PostgreSQL: {}", e),
    }

    Ok(())
}
