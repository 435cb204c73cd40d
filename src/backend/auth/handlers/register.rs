/**
 * Register Handler
 *
 * This module implements the user registration handler for
 * POST /api/auth/register.
 *
 * # Registration Process
 *
 * 1. Validate presence of username, email, password
 * 2. Validate email format, username length, password length
 * 3. Reject already-registered email or username
 * 4. Hash password using bcrypt
 * 5. Create user in database
 * 6. Return the public user projection (no token; the client logs in next)
 *
 * # Validation
 *
 * - Email must match `local@domain.tld`
 * - Username must be 2-20 characters
 * - Password must be at least 6 characters
 * - Email and username must both be unused
 */
use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::{is_valid_email, RegisterRequest, UserResponse};
use crate::backend::auth::password::hash_password;
use crate::backend::auth::users::{create_user, get_user_by_email, get_user_by_username};
use crate::backend::envelope::{ok, ApiResponse};
use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;

/// Register handler
///
/// # Errors
///
/// * `400 MISSING_FIELDS` - A required field is absent or empty
/// * `400 INVALID_EMAIL` / `INVALID_USERNAME` / `INVALID_PASSWORD` - Shape checks
/// * `400 EMAIL_EXISTS` / `USERNAME_EXISTS` - Uniqueness violations
/// * `500 INTERNAL_ERROR` - Hashing or database failure
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let username = request.username.as_deref().unwrap_or_default();
    let email = request.email.as_deref().unwrap_or_default();
    let password = request.password.as_deref().unwrap_or_default();

    if username.is_empty() || email.is_empty() || password.is_empty() {
        return Err(ApiError::MissingFields);
    }

    if !is_valid_email(email) {
        tracing::warn!("register rejected, invalid email: {email}");
        return Err(ApiError::InvalidEmail);
    }

    let username_len = username.chars().count();
    if !(2..=20).contains(&username_len) {
        return Err(ApiError::InvalidUsername);
    }

    if password.chars().count() < 6 {
        return Err(ApiError::PasswordTooShort);
    }

    if get_user_by_email(&state.db_pool, email).await?.is_some() {
        tracing::warn!("register rejected, email already registered: {email}");
        return Err(ApiError::EmailExists);
    }

    if get_user_by_username(&state.db_pool, username)
        .await?
        .is_some()
    {
        tracing::warn!("register rejected, username already taken: {username}");
        return Err(ApiError::UsernameExists);
    }

    let password_hash = hash_password(password)?;

    let user = create_user(
        &state.db_pool,
        username.to_string(),
        email.to_string(),
        password_hash,
    )
    .await?;

    tracing::info!("user registered: {} ({})", user.username, user.email);

    Ok(ok(UserResponse::from(user)))
}
