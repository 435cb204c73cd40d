/**
 * Application State Management
 *
 * This module defines the application state structure and implements the
 * `FromRef` traits for Axum state extraction.
 *
 * # Thread Safety
 *
 * `PgPool` is internally reference-counted and thread-safe; the loaded
 * configuration is shared behind an `Arc`; the analysis client is a cheap
 * clone around a `reqwest::Client`. There is no other shared mutable state
 * between requests.
 */
use axum::extract::FromRef;
use sqlx::PgPool;
use std::sync::Arc;

use crate::backend::ai::client::AnalysisClient;
use crate::backend::server::config::AppConfig;

/// Central state container for the Axum application
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool, the only shared resource
    pub db_pool: PgPool,

    /// Configuration loaded once at startup
    pub config: Arc<AppConfig>,

    /// AI analysis client; `None` when no API key is configured
    pub analysis: Option<AnalysisClient>,
}

/// Allow handlers to extract the pool directly
impl FromRef<AppState> for PgPool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

/// Allow handlers to extract the configuration directly
impl FromRef<AppState> for Arc<AppConfig> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}

/// Allow handlers to extract the analysis client directly
impl FromRef<AppState> for Option<AnalysisClient> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.analysis.clone()
    }
}
