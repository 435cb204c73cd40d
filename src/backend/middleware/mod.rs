//! Middleware Module
//!
//! HTTP middleware for the backend server. Currently a single piece: the
//! edge gate that screens every request before it reaches a handler.

pub mod gate;

pub use gate::{edge_gate, is_public_path};
