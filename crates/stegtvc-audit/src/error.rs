//! Error types for the audit crate.

use thiserror::Error;

/// Errors that can occur during chainlog operations.
#[derive(Debug, Error)]
pub enum AuditError {
    /// Failed to create the chainlog directory or file.
    #[error("failed to initialize chainlog: {0}")]
    InitializationFailed(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Internal error.
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
