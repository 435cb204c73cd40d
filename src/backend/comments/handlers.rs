/**
 * Comment Handlers
 *
 * HTTP handlers for requirement comments:
 *
 * - `GET  /api/requirements/{id}/comments` - public comment list
 * - `POST /api/requirements/{id}/comments` - post a comment (auth)
 *
 * Content must be non-empty after trimming and at most 1000 characters.
 */
use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::Json,
};
use uuid::Uuid;

use crate::backend::auth::sessions::require_user;
use crate::backend::comments::db;
use crate::backend::comments::types::{CommentResponse, CreateCommentRequest};
use crate::backend::envelope::{ok, ApiResponse};
use crate::backend::error::ApiError;
use crate::backend::requirements::db::get_requirement;
use crate::backend::server::state::AppState;

/// Maximum comment length in characters
const MAX_CONTENT_LEN: usize = 1000;

/// Get comments for a requirement, newest first. Public.
pub async fn get_comments(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<CommentResponse>>>, ApiError> {
    let comments = db::list_comments(&state.db_pool, id).await?;

    Ok(ok(comments))
}

/// Post a comment on a requirement
///
/// # Errors
///
/// * `401` - Missing or invalid token
/// * `404 NOT_FOUND` - No such requirement
/// * `400 INVALID_CONTENT` - Empty or over-long content
pub async fn post_comment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
    Json(request): Json<CreateCommentRequest>,
) -> Result<Json<ApiResponse<CommentResponse>>, ApiError> {
    let auth = require_user(&state.config.jwt_secret, &headers)?;

    if get_requirement(&state.db_pool, id).await?.is_none() {
        return Err(ApiError::NotFound("requirement"));
    }

    let content = request.content.as_deref().unwrap_or_default();
    validate_content(content)?;

    let comment = db::create_comment(&state.db_pool, auth.id, id, content).await?;

    tracing::info!("comment posted on {id} by {}", auth.username);

    Ok(ok(comment))
}

fn validate_content(content: &str) -> Result<(), ApiError> {
    if content.trim().is_empty() {
        return Err(ApiError::InvalidContent("comment must not be empty"));
    }
    if content.chars().count() > MAX_CONTENT_LEN {
        return Err(ApiError::InvalidContent(
            "comment must not exceed 1000 characters",
        ));
    }
    Ok(())
}
