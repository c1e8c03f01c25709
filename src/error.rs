//! Error types for LayerKV
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using LayerKvError
pub type Result<T> = std::result::Result<T, LayerKvError>;

/// Unified error type for LayerKV operations
#[derive(Debug, Error)]
pub enum LayerKvError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Protocol Errors
    // -------------------------------------------------------------------------
    #[error("Protocol error: {0}")]
    Protocol(String),

    #[error("{keyword} expects {expected} argument(s), got {got}")]
    Arity {
        keyword: &'static str,
        expected: usize,
        got: usize,
    },

    // -------------------------------------------------------------------------
    // Transaction Errors
    // -------------------------------------------------------------------------
    #[error("No transaction in progress")]
    NoTransaction,

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}
