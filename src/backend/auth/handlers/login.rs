/**
 * Login Handler
 *
 * This module implements the user authentication handler for
 * POST /api/auth/login.
 *
 * # Authentication Process
 *
 * 1. Look up user by email
 * 2. Verify password using bcrypt
 * 3. Issue a JWT token (24-hour expiry)
 * 4. Return token and user info, and set the httpOnly `token` cookie used
 *    by the page-route gate
 *
 * # Security
 *
 * - Passwords are verified with constant-time comparison (via bcrypt)
 * - The cookie is httpOnly, SameSite=Lax, and Secure in production
 * - Passwords are never logged or returned in responses
 */
use axum::{
    extract::State,
    http::header::SET_COOKIE,
    response::{IntoResponse, Json},
};

use crate::backend::auth::handlers::types::{is_valid_email, AuthData, LoginRequest, UserResponse};
use crate::backend::auth::password::verify_password;
use crate::backend::auth::sessions::{issue_token, TOKEN_TTL_SECS};
use crate::backend::auth::users::get_user_by_email;
use crate::backend::envelope::ok;
use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;

/// Login handler
///
/// # Errors
///
/// * `400 MISSING_FIELDS` - Email or password absent
/// * `400 INVALID_EMAIL` - Email fails the format check
/// * `404 USER_NOT_FOUND` - No account with this email
/// * `401 INVALID_PASSWORD` - Password does not match
/// * `500 INTERNAL_ERROR` - Database or signing failure
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let email = request.email.as_deref().unwrap_or_default();
    let password = request.password.as_deref().unwrap_or_default();

    if email.is_empty() || password.is_empty() {
        return Err(ApiError::MissingFields);
    }

    if !is_valid_email(email) {
        return Err(ApiError::InvalidEmail);
    }

    let user = get_user_by_email(&state.db_pool, email)
        .await?
        .ok_or_else(|| {
            tracing::warn!("login rejected, no such user: {email}");
            ApiError::UserNotFound
        })?;

    if !verify_password(password, &user.password_hash)? {
        tracing::warn!("login rejected, wrong password: {email}");
        return Err(ApiError::WrongPassword);
    }

    let token = issue_token(&state.config.jwt_secret, &user)?;

    tracing::info!("user logged in: {} ({})", user.username, user.email);

    let cookie = session_cookie(&token, state.config.secure_cookies);
    let body = ok(AuthData {
        user: UserResponse::from(user),
        token,
    });

    Ok(([(SET_COOKIE, cookie)], body))
}

/// Build the `Set-Cookie` value carrying the session token.
fn session_cookie(token: &str, secure: bool) -> String {
    let mut cookie =
        format!("token={token}; HttpOnly; Path=/; Max-Age={TOKEN_TTL_SECS}; SameSite=Lax");
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_cookie_attributes() {
        let cookie = session_cookie("abc123", false);
        assert!(cookie.starts_with("token=abc123;"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("Max-Age=86400"));
        assert!(cookie.contains("SameSite=Lax"));
        assert!(!cookie.contains("Secure"));
    }

    #[test]
    fn test_session_cookie_secure_in_production() {
        assert!(session_cookie("abc123", true).ends_with("; Secure"));
    }
}
