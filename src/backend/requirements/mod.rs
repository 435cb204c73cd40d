//! Requirements Module
//!
//! Requirement resources: data model, validation, database operations, and
//! HTTP handlers for CRUD, filtered listing, and related lookups.
//!
//! # Module Structure
//!
//! ```text
//! requirements/
//! ├── mod.rs      - Module exports
//! ├── types.rs    - Model, payloads, projections, validation
//! ├── db.rs       - Queries (CRUD, listing, tags, related)
//! └── handlers.rs - HTTP handlers
//! ```
//!
//! # Ownership
//!
//! Only the creating user may update or delete a requirement. Handlers
//! enforce this through `auth::ownership::ensure_owner` after loading the
//! row; the edge gate performs no per-resource checks.

/// Model, payloads, projections, validation
pub mod types;

/// Database operations
pub mod db;

/// HTTP handlers
pub mod handlers;

// Re-export commonly used types
pub use types::{Requirement, RequirementResponse, RequirementStatus};
