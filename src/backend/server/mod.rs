//! Server Module
//!
//! Initialization and configuration of the Axum HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Configuration loading and pool creation
//! └── init.rs         - App assembly
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration**: `AppConfig::from_env`; `DATABASE_URL` and
//!    `JWT_SECRET` are required, startup fails without them
//! 2. **Database**: bounded pool with a short transient-error retry, then
//!    migrations
//! 3. **Router**: all routes plus the edge gate layer

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use config::AppConfig;
pub use init::create_app;
pub use state::AppState;
