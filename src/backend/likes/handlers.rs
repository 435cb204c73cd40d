/**
 * Like Handlers
 *
 * HTTP handlers for the like endpoints:
 *
 * - `GET  /api/requirements/{id}/like-status` - current status
 * - `POST /api/requirements/{id}/like-status` - toggle (auth)
 *
 * The GET is deliberately lenient: an unauthenticated caller gets
 * `{liked: false}` rather than an error, unlike the other read endpoints.
 * The toggle flips the existence of the unique (user, requirement) row and
 * returns the new state.
 */
use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::backend::auth::sessions::{maybe_user, require_user};
use crate::backend::envelope::{ok, ApiResponse};
use crate::backend::error::ApiError;
use crate::backend::likes::db;
use crate::backend::requirements::db::get_requirement;
use crate::backend::server::state::AppState;

/// Like state payload
#[derive(Serialize, Debug)]
pub struct LikeStatus {
    pub liked: bool,
}

/// Get like status
///
/// Anonymous callers and callers with a stale token both get
/// `{liked: false}`.
pub async fn get_like_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
) -> Result<Json<ApiResponse<LikeStatus>>, ApiError> {
    let liked = match maybe_user(&state.config.jwt_secret, &headers) {
        Some(auth) => db::like_exists(&state.db_pool, auth.id, id).await?,
        None => false,
    };

    Ok(ok(LikeStatus { liked }))
}

/// Toggle like status
///
/// # Errors
///
/// * `401` - Missing or invalid token
/// * `404 NOT_FOUND` - No such requirement
pub async fn toggle_like(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
) -> Result<Json<ApiResponse<LikeStatus>>, ApiError> {
    let auth = require_user(&state.config.jwt_secret, &headers)?;

    if get_requirement(&state.db_pool, id).await?.is_none() {
        return Err(ApiError::NotFound("requirement"));
    }

    let liked = if db::like_exists(&state.db_pool, auth.id, id).await? {
        db::delete_like(&state.db_pool, auth.id, id).await?;
        false
    } else {
        db::insert_like(&state.db_pool, auth.id, id).await?;
        true
    };

    tracing::info!(
        "like toggled on {id} by {}: liked={liked}",
        auth.username
    );

    Ok(ok(LikeStatus { liked }))
}
