//! Backend Module
//!
//! This module contains all server-side code for the ReqMarket application:
//! an Axum HTTP server with a JSON API for users, requirements, tags,
//! comments, likes, and AI feasibility analysis.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`middleware`** - The edge gate screening requests before handlers
//! - **`auth`** - Registration, login, JWT sessions, user management
//! - **`requirements`** - Requirement CRUD, listing, filtering, related lookups
//! - **`comments`** - Comment listing and creation
//! - **`likes`** - Like status and toggling
//! - **`ai`** - Feasibility analysis via an OpenAI-compatible API
//! - **`envelope`** - The uniform `{success, data, error}` response wrapper
//! - **`error`** - API error types and HTTP response conversion
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── middleware/     - Edge gate
//! ├── auth/           - Authentication and users
//! ├── requirements/   - Requirement resources
//! ├── comments/       - Comment resources
//! ├── likes/          - Like resources
//! ├── ai/             - AI analysis client and handler
//! ├── envelope.rs     - Response envelope
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! `AppState` holds the PostgreSQL connection pool, the loaded configuration,
//! and the optional AI analysis client. Handlers are stateless per request;
//! the pool is the only shared resource.
//!
//! # Error Handling
//!
//! Handlers return `Result<_, ApiError>` and propagate failures with `?`.
//! Validation failures map to 400 with a specific error code; unexpected
//! failures are logged and collapsed to 500 `INTERNAL_ERROR`.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Edge gate middleware
pub mod middleware;

/// Authentication and user management
pub mod auth;

/// Requirement resources
pub mod requirements;

/// Comment resources
pub mod comments;

/// Like resources
pub mod likes;

/// AI feasibility analysis
pub mod ai;

/// Uniform response envelope
pub mod envelope;

/// Backend error types
pub mod error;

/// Re-export commonly used types
pub use envelope::{ApiResponse, ErrorBody};
pub use error::ApiError;
pub use server::init::create_app;
