//! Error types for the token crate.

use stegtvc_audit::AuditError;
use thiserror::Error;

/// Errors that can occur during token issuance.
#[derive(Debug, Error)]
pub enum TokenError {
    /// The caller requested a lifetime that is non-positive or too large
    /// to represent as an expiry timestamp.
    #[error("ttl_seconds out of range: {ttl}")]
    InvalidTtl { ttl: i64 },

    /// The signing delegate failed. No partial token is ever returned.
    #[error("token signing failed: {0}")]
    SigningFailed(String),

    /// Writing the issuance event to the chainlog failed.
    #[error("chainlog append failed: {0}")]
    Audit(#[from] AuditError),
}
