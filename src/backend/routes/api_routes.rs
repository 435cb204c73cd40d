/**
 * API Route Configuration
 *
 * This module wires every API endpoint to its handler.
 *
 * # Routes
 *
 * ## Authentication
 * - `POST /api/auth/register` - User registration
 * - `POST /api/auth/login` - User login (sets the session cookie)
 * - `POST /api/auth/logout` - Clears the session cookie
 * - `GET  /api/auth/me` - Get current user
 *
 * ## Requirements
 * - `GET    /api/requirements` - List with filters and paging
 * - `POST   /api/requirements` - Create (auth)
 * - `POST   /api/requirements/analyze` - AI feasibility analysis
 * - `GET    /api/requirements/{id}` - Detail with comments
 * - `PUT    /api/requirements/{id}` - Update (auth + owner)
 * - `DELETE /api/requirements/{id}` - Delete (auth + owner)
 * - `GET    /api/requirements/{id}/comments` - Comment list
 * - `POST   /api/requirements/{id}/comments` - Post a comment (auth)
 * - `GET    /api/requirements/{id}/like-status` - Like status
 * - `POST   /api/requirements/{id}/like-status` - Toggle like (auth)
 * - `GET    /api/requirements/{id}/related` - Tag-sharing requirements
 *
 * # Authentication
 *
 * The edge gate screens every non-auth API route for a valid token before
 * these handlers run; handlers that need the caller's identity re-validate
 * the header themselves.
 */
use axum::Router;

use crate::backend::ai::handlers::analyze_requirement;
use crate::backend::auth::handlers::{get_me, login, logout, register};
use crate::backend::comments::handlers::{get_comments, post_comment};
use crate::backend::likes::handlers::{get_like_status, toggle_like};
use crate::backend::requirements::handlers::{
    create_requirement, delete_requirement, get_requirement, list_requirements,
    related_requirements, update_requirement,
};
use crate::backend::server::state::AppState;

/// Configure API routes
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Authentication endpoints
        .route(
            "/api/auth/register",
            axum::routing::post(register),
        )
        .route(
            "/api/auth/login",
            axum::routing::post(login),
        )
        .route(
            "/api/auth/logout",
            axum::routing::post(logout),
        )
        .route(
            "/api/auth/me",
            axum::routing::get(get_me),
        )
        // Requirement endpoints
        .route(
            "/api/requirements",
            axum::routing::get(list_requirements).post(create_requirement),
        )
        .route(
            "/api/requirements/analyze",
            axum::routing::post(analyze_requirement),
        )
        .route(
            "/api/requirements/{id}",
            axum::routing::get(get_requirement)
                .put(update_requirement)
                .delete(delete_requirement),
        )
        // Comment endpoints
        .route(
            "/api/requirements/{id}/comments",
            axum::routing::get(get_comments).post(post_comment),
        )
        // Like endpoints
        .route(
            "/api/requirements/{id}/like-status",
            axum::routing::get(get_like_status).post(toggle_like),
        )
        // Related requirements
        .route(
            "/api/requirements/{id}/related",
            axum::routing::get(related_requirements),
        )
}
