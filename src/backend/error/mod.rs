//! Backend Error Module
//!
//! This module defines the API error type used by HTTP handlers and its
//! conversion into HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - Error conversion implementations
//! ```
//!
//! # Error Taxonomy
//!
//! The API surfaces a flat set of string codes in the envelope's
//! `error.code` field (`MISSING_FIELDS`, `INVALID_TITLE`, `FORBIDDEN`, ...).
//! Each `ApiError` variant maps to exactly one code and one HTTP status.
//! Unexpected failures (database, upstream API, hashing, signing) are
//! converted via `#[from]`, logged at the response boundary, and collapsed
//! to 500 `INTERNAL_ERROR`.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::ApiError;
