//! Error types for the core crate.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading configuration or the policy bundle.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The use-case table has no `"default"` entry.
    #[error("use-case table is missing the required \"default\" entry")]
    MissingDefault,

    /// A use-case key in the table is empty.
    #[error("use-case table contains an empty key")]
    EmptyUseCaseKey,

    /// The policy bundle file does not exist at the resolved path.
    #[error("policy bundle not found at {path}")]
    BundleNotFound { path: PathBuf },

    /// The policy bundle (or routing table document) is not valid JSON.
    #[error("failed to parse JSON document: {0}")]
    ParseError(#[from] serde_json::Error),

    /// IO error while reading a configuration file.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
