//! Likes Module
//!
//! Like resources. A like is the existence of a unique
//! `(user, requirement)` row; presence/absence is the only state, and the
//! toggle endpoint flips it.

/// Database operations
pub mod db;

/// HTTP handlers
pub mod handlers;

// Re-export commonly used types
pub use handlers::LikeStatus;
