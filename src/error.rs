//! Error types for photopager
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using PagerError
pub type Result<T> = std::result::Result<T, PagerError>;

/// Unified error type for photopager operations
#[derive(Debug, Error)]
pub enum PagerError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Remote Errors
    // -------------------------------------------------------------------------
    /// Network failure or non-success HTTP status
    #[error("Fetch error: {0}")]
    Fetch(String),

    // -------------------------------------------------------------------------
    // Input Errors
    // -------------------------------------------------------------------------
    /// Input that cannot be paginated (not a sequence, zero page size, ...)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Action not allowed in the gallery's current phase
    #[error("Invalid transition: {0}")]
    InvalidTransition(String),

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(String),

    // -------------------------------------------------------------------------
    // Snapshot Errors
    // -------------------------------------------------------------------------
    #[error("Snapshot corruption detected: {0}")]
    SnapshotCorruption(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for PagerError {
    fn from(err: reqwest::Error) -> Self {
        PagerError::Fetch(err.to_string())
    }
}

impl From<serde_json::Error> for PagerError {
    fn from(err: serde_json::Error) -> Self {
        PagerError::Serialization(err.to_string())
    }
}

impl From<bincode::Error> for PagerError {
    fn from(err: bincode::Error) -> Self {
        PagerError::Serialization(err.to_string())
    }
}
