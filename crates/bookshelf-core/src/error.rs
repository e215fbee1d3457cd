//! Error types for catalog operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these
//! to rendered failure screens and keeps the session running.

use thiserror::Error;

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Core error type for catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Record field validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// No record with the requested id
    #[error("Not found: {0}")]
    NotFound(String),

    /// Backing store I/O or parse error
    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        CatalogError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Storage(err.to_string())
    }
}
