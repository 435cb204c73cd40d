/**
 * Server Initialization
 *
 * This module handles the initialization of the Axum HTTP server:
 * database pool creation (with migrations), state assembly, and route
 * configuration.
 *
 * # Initialization Process
 *
 * 1. Create the PostgreSQL connection pool and run migrations
 * 2. Build the AI analysis client if configured
 * 3. Assemble `AppState` and the router
 *
 * Unlike optional services, the database is required: a connection failure
 * after the bounded retry aborts startup.
 */
use axum::Router;
use std::sync::Arc;

use crate::backend::ai::client::AnalysisClient;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{connect_database, AppConfig};
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
///
/// # Errors
///
/// Returns the underlying `sqlx::Error` when the database cannot be
/// reached or migrations fail.
pub async fn create_app(config: AppConfig) -> Result<Router, sqlx::Error> {
    tracing::info!("initializing reqmarket backend server");

    let db_pool = connect_database(&config.database_url).await?;

    let analysis = config.ai.as_ref().map(AnalysisClient::new);

    let app_state = AppState {
        db_pool,
        config: Arc::new(config),
        analysis,
    };

    let app = create_router(app_state);

    tracing::info!("router configured");

    Ok(app)
}
