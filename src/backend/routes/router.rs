/**
 * Router Configuration
 *
 * This module assembles the complete Axum router:
 *
 * 1. API routes (auth, requirements, comments, likes, analysis)
 * 2. Static file service under `/static`
 * 3. A 404 fallback for everything else
 * 4. The edge gate layered over the whole router
 */
use axum::{http::StatusCode, middleware, Router};
use tower_http::services::ServeDir;

use crate::backend::middleware::gate::edge_gate;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new();

    // API routes
    let router = configure_api_routes(router);

    // Static file serving
    let router = router.nest_service("/static", ServeDir::new("public"));

    // Fallback handler for 404
    let router = router.fallback(|| async { (StatusCode::NOT_FOUND, "404 Not Found") });

    // The edge gate sees every request, including the fallback
    let router = router.layer(middleware::from_fn_with_state(
        app_state.clone(),
        edge_gate,
    ));

    router.with_state(app_state)
}
