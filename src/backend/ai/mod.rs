//! AI Analysis Module
//!
//! Feasibility analysis of requirements via an OpenAI-compatible chat
//! completion API. This is integration glue: a fixed prompt template, one
//! POST, and strict JSON parsing of the reply. Results are relayed to the
//! caller and never persisted.

/// Completion API client
pub mod client;

/// HTTP handler
pub mod handlers;

// Re-export commonly used types
pub use client::{AiAnalysis, AnalysisClient, AnalysisError};
