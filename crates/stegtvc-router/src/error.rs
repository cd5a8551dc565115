//! Error types for the router crate.

use stegtvc_audit::AuditError;
use stegtvc_provider::ProviderError;
use thiserror::Error;

/// Errors that can occur while executing an AI invocation.
#[derive(Debug, Error)]
pub enum RouterError {
    /// The upstream provider call failed. Never retried.
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// Writing the invocation event to the chainlog failed.
    #[error("chainlog append failed: {0}")]
    Audit(#[from] AuditError),
}
