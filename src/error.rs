//! Error types for kagari
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using KagariError
pub type Result<T> = std::result::Result<T, KagariError>;

/// Unified error type for kagari operations
#[derive(Debug, Error)]
pub enum KagariError {
    // -------------------------------------------------------------------------
    // Protocol Errors
    // -------------------------------------------------------------------------
    #[error("Protocol error: {0}")]
    Protocol(String),

    // -------------------------------------------------------------------------
    // Primary Engine Errors
    // -------------------------------------------------------------------------
    #[error("{message}")]
    Engine {
        /// Human-readable failure summary, embedded into degraded-mode reports
        message: String,

        /// Textual failure trace, when the engine could capture one
        traceback: Option<String>,
    },
}
