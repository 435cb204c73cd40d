//! Authentication Module
//!
//! This module handles user registration, authentication, session tokens,
//! and the ownership capability used by mutating handlers.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and database operations
//! ├── password.rs     - bcrypt hashing and verification
//! ├── sessions.rs     - JWT token issuance and validation
//! ├── ownership.rs    - Owner-only authorization check
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: username/email/password validated → user created with a
//!    bcrypt hash → public projection returned
//! 2. **Login**: credentials verified → JWT issued (24h) → token returned
//!    and set as an httpOnly cookie
//! 3. **Per request**: handlers re-validate the `Authorization` header via
//!    `sessions::require_user`, independent of the edge gate
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt (cost 12) before storage
//! - Tokens are HS256-signed with a secret that MUST be configured; the
//!   server refuses to start without it
//! - Tokens are not revocable; logout only clears the cookie

/// User data model and database operations
pub mod users;

/// Password hashing and verification
pub mod password;

/// JWT token issuance and validation
pub mod sessions;

/// Owner-only authorization check
pub mod ownership;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::{get_me, login, logout, register, UserResponse};
pub use ownership::ensure_owner;
pub use sessions::{maybe_user, require_user, AuthUser};
