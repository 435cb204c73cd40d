/**
 * Backend Error Types
 *
 * This module defines the error type returned by HTTP handlers. Each variant
 * carries enough information to produce the wire error code, the HTTP status,
 * and a human-readable message for the response envelope.
 *
 * # Status Mapping
 *
 * - Validation failures are 400
 * - Missing/expired credentials are 401
 * - Ownership violations are 403
 * - Missing resources are 404
 * - Everything unexpected is 500 `INTERNAL_ERROR`
 *
 * Note that `INVALID_PASSWORD` is used for two distinct situations, matching
 * the API contract: a too-short password at registration (400) and a wrong
 * password at login (401). They are separate variants here.
 */
use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::ai::client::AnalysisError;

/// API error type for all HTTP handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required field is missing from the request body
    #[error("please fill in all required fields")]
    MissingFields,

    /// Email address fails the format check
    #[error("invalid email address")]
    InvalidEmail,

    /// Username outside the 2-20 character range
    #[error("username must be between 2 and 20 characters")]
    InvalidUsername,

    /// Registration password shorter than 6 characters
    #[error("password must be at least 6 characters")]
    PasswordTooShort,

    /// Login password does not match the stored hash
    #[error("wrong password")]
    WrongPassword,

    /// Email already registered
    #[error("this email is already registered")]
    EmailExists,

    /// Username already taken
    #[error("this username is already taken")]
    UsernameExists,

    /// No user with the given email or id
    #[error("user does not exist")]
    UserNotFound,

    /// No credentials presented
    #[error("not signed in")]
    Unauthorized,

    /// Credentials presented but invalid or expired
    #[error("session expired, please sign in again")]
    InvalidToken,

    /// Resource does not exist; the string names what was looked up
    #[error("{0} does not exist")]
    NotFound(&'static str),

    /// Authenticated, but not the owner of the resource
    #[error("you do not have permission to perform this action")]
    Forbidden,

    /// Comment content empty or too long; the string carries the reason
    #[error("{0}")]
    InvalidContent(&'static str),

    /// Title outside the 5-100 character range
    #[error("title must be between 5 and 100 characters")]
    InvalidTitle,

    /// Description outside the 20-5000 character range
    #[error("description must be between 20 and 5000 characters")]
    InvalidDescription,

    /// Budget negative or not a finite number
    #[error("budget must be a number greater than or equal to 0")]
    InvalidBudget,

    /// Deadline not in the future
    #[error("deadline must be a date in the future")]
    InvalidDeadline,

    /// Status not one of the fixed set
    #[error("invalid status value")]
    InvalidStatus,

    /// Database error
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Password hashing error
    #[error("password hashing error: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    /// Token signing error
    #[error("token signing error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    /// AI analysis error (upstream call or response parsing)
    #[error("analysis error: {0}")]
    Analysis(#[from] AnalysisError),
}

impl ApiError {
    /// The stable wire code surfaced in the envelope's `error.code` field.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingFields => "MISSING_FIELDS",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::InvalidUsername => "INVALID_USERNAME",
            Self::PasswordTooShort | Self::WrongPassword => "INVALID_PASSWORD",
            Self::EmailExists => "EMAIL_EXISTS",
            Self::UsernameExists => "USERNAME_EXISTS",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Forbidden => "FORBIDDEN",
            Self::InvalidContent(_) => "INVALID_CONTENT",
            Self::InvalidTitle => "INVALID_TITLE",
            Self::InvalidDescription => "INVALID_DESCRIPTION",
            Self::InvalidBudget => "INVALID_BUDGET",
            Self::InvalidDeadline => "INVALID_DEADLINE",
            Self::InvalidStatus => "INVALID_STATUS",
            Self::Database(_) | Self::Hash(_) | Self::Token(_) | Self::Analysis(_) => {
                "INTERNAL_ERROR"
            }
        }
    }

    /// The HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingFields
            | Self::InvalidEmail
            | Self::InvalidUsername
            | Self::PasswordTooShort
            | Self::EmailExists
            | Self::UsernameExists
            | Self::InvalidContent(_)
            | Self::InvalidTitle
            | Self::InvalidDescription
            | Self::InvalidBudget
            | Self::InvalidDeadline
            | Self::InvalidStatus => StatusCode::BAD_REQUEST,
            Self::WrongPassword | Self::Unauthorized | Self::InvalidToken => {
                StatusCode::UNAUTHORIZED
            }
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::UserNotFound | Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Database(_) | Self::Hash(_) | Self::Token(_) | Self::Analysis(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// The message surfaced to the client.
    ///
    /// Internal errors are masked with a generic message; the underlying
    /// cause is logged at the response boundary, never sent to the client.
    pub fn message(&self) -> String {
        if self.status_code() == StatusCode::INTERNAL_SERVER_ERROR {
            "something went wrong, please try again later".to_string()
        } else {
            self.to_string()
        }
    }
}
