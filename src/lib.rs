//! ReqMarket - Main Library
//!
//! ReqMarket is a requirements marketplace backend built with Rust: users
//! post project requirements, browse and filter listings, comment, like, and
//! optionally request an AI-generated feasibility analysis.
//!
//! # Overview
//!
//! This library provides:
//! - An Axum HTTP server exposing a JSON API under `/api/`
//! - JWT-based session management with bcrypt credential storage
//! - PostgreSQL persistence via sqlx (users, requirements, tags, comments, likes)
//! - An edge gate middleware screening every request before handlers run
//! - A pass-through client for an OpenAI-compatible completion API
//!
//! # Module Structure
//!
//! The library is a single `backend` module; there is no frontend code in
//! this crate. Clients consume the JSON API over HTTP.
//!
//! # Usage
//!
//! ```rust,no_run
//! use reqmarket::backend::server::config::AppConfig;
//! use reqmarket::backend::server::init::create_app;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(config).await?;
//! // Use app with Axum server
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! All API errors funnel through `backend::error::ApiError`, which carries a
//! wire error code and HTTP status and renders as the uniform
//! `{success, data, error}` envelope.

/// Backend server-side code
pub mod backend;
