/**
 * Requirement Handlers
 *
 * HTTP handlers for the requirement endpoints:
 *
 * - `GET    /api/requirements`              - list with filters and paging
 * - `POST   /api/requirements`              - create (auth)
 * - `GET    /api/requirements/{id}`         - detail with comments
 * - `PUT    /api/requirements/{id}`         - update (auth + owner)
 * - `DELETE /api/requirements/{id}`         - delete (auth + owner)
 * - `GET    /api/requirements/{id}/related` - up to 5 tag-sharing others
 *
 * Mutating handlers re-validate the caller's token themselves and consult
 * the ownership capability; the edge gate is a coarse screen only.
 */
use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    response::Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::backend::auth::ownership::ensure_owner;
use crate::backend::auth::sessions::require_user;
use crate::backend::comments::db::list_comments;
use crate::backend::envelope::{ok, ApiResponse};
use crate::backend::error::ApiError;
use crate::backend::requirements::db;
use crate::backend::requirements::types::{
    ListData, ListFilter, ListQuery, RelatedRequirement, RequirementDetail, RequirementPayload,
    RequirementResponse, RequirementStatus, validate_payload,
};
use crate::backend::server::state::AppState;

/// List requirements
///
/// Filters (`status`, `tag`, `search`) are conjunctive; `search` matches
/// title or description case-insensitively. Response carries the page of
/// items plus `total`, `page`, `limit`, and `totalPages`.
pub async fn list_requirements(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ApiResponse<ListData>>, ApiError> {
    let filter = ListFilter::from_query(&query);

    let (items, total) = db::list_requirements(&state.db_pool, &filter).await?;

    let total_pages = (total + filter.limit - 1) / filter.limit;

    Ok(ok(ListData {
        items,
        total,
        page: filter.page,
        limit: filter.limit,
        total_pages,
    }))
}

/// Create a requirement
///
/// # Errors
///
/// * `401` - Missing or invalid token
/// * `400` - Field validation (title, description, budget, deadline)
pub async fn create_requirement(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<RequirementPayload>,
) -> Result<Json<ApiResponse<RequirementResponse>>, ApiError> {
    let auth = require_user(&state.config.jwt_secret, &headers)?;

    let data = validate_payload(&payload)?;

    let id = db::insert_requirement(&state.db_pool, auth.id, &data).await?;

    if let Some(tags) = &data.tags {
        if !tags.is_empty() {
            db::attach_tags(&state.db_pool, id, tags).await?;
        }
    }

    tracing::info!("requirement created: {id} by {}", auth.username);

    let created = db::fetch_summary(&state.db_pool, id)
        .await?
        .ok_or(ApiError::NotFound("requirement"))?;

    Ok(ok(created))
}

/// Get requirement detail
///
/// Public. Includes the author, flattened tags, counts, and the comment
/// list (newest first).
pub async fn get_requirement(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<RequirementDetail>>, ApiError> {
    let requirement = db::fetch_summary(&state.db_pool, id)
        .await?
        .ok_or(ApiError::NotFound("requirement"))?;

    let comments = list_comments(&state.db_pool, id).await?;

    Ok(ok(RequirementDetail {
        requirement,
        comments,
    }))
}

/// Update a requirement
///
/// Owner only. Title, description, budget, and deadline are replaced;
/// status may be any value from the fixed set (transitions are
/// unconstrained); a provided tag list fully replaces the previous set.
///
/// # Errors
///
/// * `404 NOT_FOUND` - No such requirement
/// * `403 FORBIDDEN` - Caller is not the owner
/// * `400 INVALID_STATUS` - Status outside the fixed set
pub async fn update_requirement(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
    Json(payload): Json<RequirementPayload>,
) -> Result<Json<ApiResponse<RequirementResponse>>, ApiError> {
    let auth = require_user(&state.config.jwt_secret, &headers)?;

    let existing = db::get_requirement(&state.db_pool, id)
        .await?
        .ok_or(ApiError::NotFound("requirement"))?;

    ensure_owner(&auth, existing.user_id)?;

    let data = validate_payload(&payload)?;

    // Absent status keeps the current one
    let status = match payload.status.as_deref() {
        Some(raw) => RequirementStatus::from_str(raw).ok_or(ApiError::InvalidStatus)?,
        None => existing.status,
    };

    db::update_requirement_row(&state.db_pool, id, &data, status).await?;

    if let Some(tags) = &data.tags {
        db::replace_tags(&state.db_pool, id, tags).await?;
    }

    tracing::info!("requirement updated: {id} by {}", auth.username);

    let updated = db::fetch_summary(&state.db_pool, id)
        .await?
        .ok_or(ApiError::NotFound("requirement"))?;

    Ok(ok(updated))
}

/// Deletion acknowledgement payload
#[derive(Serialize, Debug)]
pub struct DeleteData {
    message: &'static str,
}

/// Delete a requirement
///
/// Owner only. Hard delete; comments, likes, and tag associations cascade.
pub async fn delete_requirement(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
) -> Result<Json<ApiResponse<DeleteData>>, ApiError> {
    let auth = require_user(&state.config.jwt_secret, &headers)?;

    let existing = db::get_requirement(&state.db_pool, id)
        .await?
        .ok_or(ApiError::NotFound("requirement"))?;

    ensure_owner(&auth, existing.user_id)?;

    db::delete_requirement(&state.db_pool, id).await?;

    tracing::info!("requirement deleted: {id} by {}", auth.username);

    Ok(ok(DeleteData {
        message: "requirement deleted",
    }))
}

/// Related requirements
///
/// Public. Up to 5 requirements sharing at least one tag with the given
/// one, newest first, the source excluded.
pub async fn related_requirements(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<RelatedRequirement>>>, ApiError> {
    if db::get_requirement(&state.db_pool, id).await?.is_none() {
        return Err(ApiError::NotFound("requirement"));
    }

    let related = db::related_requirements(&state.db_pool, id).await?;

    Ok(ok(related))
}
