/**
 * Session Management and JWT Tokens
 *
 * This module handles JWT token generation and validation for user sessions.
 *
 * # Token Lifecycle
 *
 * Tokens are signed with HS256 using the configured secret, carry the user's
 * id, email, and username plus a fresh unique token id (`jti`), and expire
 * 24 hours after issuance. There is no revocation list: a token stays valid
 * until natural expiry regardless of logout.
 *
 * # Validation
 *
 * `validate_token` accepts the raw token or a full `Authorization` header
 * value (`Bearer <token>`), and returns `None` for anything that does not
 * verify: bad signature, expired, malformed. Failures are logged, never
 * propagated.
 */
use axum::http::{header::AUTHORIZATION, HeaderMap};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

use crate::backend::auth::users::User;
use crate::backend::error::ApiError;

/// Token lifetime: 24 hours
pub const TOKEN_TTL_SECS: u64 = 24 * 60 * 60;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Email
    pub email: String,
    /// Username
    pub username: String,
    /// Unique token id
    pub jti: String,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
}

/// Authenticated caller identity extracted from a verified token.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: Uuid,
    pub email: String,
    pub username: String,
}

/// Create a JWT token for a user
///
/// # Arguments
/// * `secret` - Signing secret from configuration
/// * `user` - The user the token identifies
///
/// # Returns
/// Signed token string, expiring in 24 hours
pub fn issue_token(secret: &str, user: &User) -> Result<String, jsonwebtoken::errors::Error> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs();

    let claims = Claims {
        sub: user.id.to_string(),
        email: user.email.clone(),
        username: user.username.clone(),
        jti: Uuid::new_v4().to_string(),
        iat: now,
        exp: now + TOKEN_TTL_SECS,
    };

    let key = EncodingKey::from_secret(secret.as_ref());
    encode(&Header::default(), &claims, &key)
}

/// Verify and decode a token.
///
/// Strips an optional `"Bearer "` prefix, then checks signature and expiry.
/// Returns `None` on any failure; the cause is logged.
pub fn validate_token(secret: &str, token: &str) -> Option<Claims> {
    let token = token.strip_prefix("Bearer ").unwrap_or(token);
    let key = DecodingKey::from_secret(secret.as_ref());

    match decode::<Claims>(token, &key, &Validation::default()) {
        Ok(data) => Some(data.claims),
        Err(e) => {
            tracing::warn!("token validation failed: {e}");
            None
        }
    }
}

/// Extract and verify the caller from the `Authorization` header.
///
/// Handlers call this themselves even though the edge gate has already
/// screened the request; the gate does not inject any payload downstream.
///
/// # Errors
/// * `Unauthorized` - header missing
/// * `InvalidToken` - header present but the token does not verify
pub fn require_user(secret: &str, headers: &HeaderMap) -> Result<AuthUser, ApiError> {
    let header = headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or(ApiError::Unauthorized)?;

    let claims = validate_token(secret, header).ok_or(ApiError::InvalidToken)?;

    let id = Uuid::parse_str(&claims.sub).map_err(|_| ApiError::InvalidToken)?;

    Ok(AuthUser {
        id,
        email: claims.email,
        username: claims.username,
    })
}

/// Like `require_user`, but anonymous callers are not an error.
///
/// Used by reads that degrade gracefully for unauthenticated callers
/// (the like-status lookup).
pub fn maybe_user(secret: &str, headers: &HeaderMap) -> Option<AuthUser> {
    require_user(secret, headers).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    const SECRET: &str = "test-secret";

    fn test_user() -> User {
        User {
            id: Uuid::new_v4(),
            username: "tester".to_string(),
            email: "test@example.com".to_string(),
            password_hash: "irrelevant".to_string(),
            avatar: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_issue_and_validate_round_trip() {
        let user = test_user();
        let token = issue_token(SECRET, &user).unwrap();

        let claims = validate_token(SECRET, &token).unwrap();
        assert_eq!(claims.sub, user.id.to_string());
        assert_eq!(claims.email, user.email);
        assert_eq!(claims.username, user.username);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_validate_strips_bearer_prefix() {
        let user = test_user();
        let token = issue_token(SECRET, &user).unwrap();

        let claims = validate_token(SECRET, &format!("Bearer {token}"));
        assert!(claims.is_some());
    }

    #[test]
    fn test_validate_rejects_wrong_secret() {
        let token = issue_token(SECRET, &test_user()).unwrap();
        assert!(validate_token("another-secret", &token).is_none());
    }

    #[test]
    fn test_validate_rejects_garbage() {
        assert!(validate_token(SECRET, "invalid.token.here").is_none());
    }

    #[test]
    fn test_validate_rejects_expired_token() {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs();
        let claims = Claims {
            sub: Uuid::new_v4().to_string(),
            email: "test@example.com".to_string(),
            username: "tester".to_string(),
            jti: Uuid::new_v4().to_string(),
            iat: now - 2 * TOKEN_TTL_SECS,
            exp: now - TOKEN_TTL_SECS,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_ref()),
        )
        .unwrap();

        assert!(validate_token(SECRET, &token).is_none());
    }

    #[test]
    fn test_each_token_gets_a_fresh_jti() {
        let user = test_user();
        let first = validate_token(SECRET, &issue_token(SECRET, &user).unwrap()).unwrap();
        let second = validate_token(SECRET, &issue_token(SECRET, &user).unwrap()).unwrap();
        assert_ne!(first.jti, second.jti);
    }

    #[test]
    fn test_require_user_without_header() {
        let headers = HeaderMap::new();
        let err = require_user(SECRET, &headers).unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized));
    }

    #[test]
    fn test_require_user_with_bad_token() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, "Bearer not-a-token".parse().unwrap());
        let err = require_user(SECRET, &headers).unwrap_err();
        assert!(matches!(err, ApiError::InvalidToken));
    }

    #[test]
    fn test_require_user_round_trip() {
        let user = test_user();
        let token = issue_token(SECRET, &user).unwrap();
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, format!("Bearer {token}").parse().unwrap());

        let auth = require_user(SECRET, &headers).unwrap();
        assert_eq!(auth.id, user.id);
        assert_eq!(auth.username, user.username);
    }
}
