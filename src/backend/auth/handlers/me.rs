/**
 * Get Current User Handler
 *
 * This module implements the handler for GET /api/auth/me, which returns
 * the public projection of the currently authenticated user.
 *
 * # Authentication
 *
 * Requires a valid JWT in the `Authorization` header. The token is
 * re-validated here even though the edge gate already screened the request.
 */
use axum::{extract::State, http::HeaderMap, response::Json};

use crate::backend::auth::handlers::types::UserResponse;
use crate::backend::auth::sessions::require_user;
use crate::backend::auth::users::get_user_by_id;
use crate::backend::envelope::{ok, ApiResponse};
use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;

/// Get current user handler
///
/// # Errors
///
/// * `401 UNAUTHORIZED` / `INVALID_TOKEN` - Missing or bad credentials
/// * `404 USER_NOT_FOUND` - Token is valid but the user row is gone
pub async fn get_me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let auth = require_user(&state.config.jwt_secret, &headers)?;

    let user = get_user_by_id(&state.db_pool, auth.id)
        .await?
        .ok_or(ApiError::UserNotFound)?;

    Ok(ok(UserResponse::from(user)))
}
