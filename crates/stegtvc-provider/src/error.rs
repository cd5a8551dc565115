//! Error types for the provider crate.

use thiserror::Error;

/// Errors from upstream completion calls.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The upstream API returned a non-success status.
    #[error("upstream provider error {status}: {body}")]
    Upstream { status: u16, body: String },

    /// The call exceeded the request timeout.
    #[error("upstream provider call timed out")]
    Timeout,

    /// Required credentials are not configured.
    #[error("missing credentials: {0}")]
    MissingCredentials(String),

    /// The upstream response did not contain completion text.
    #[error("malformed upstream response: {0}")]
    MalformedResponse(String),

    /// Transport-level HTTP failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// No client exists for the requested provider.
    #[error("unsupported provider: {0}")]
    Unsupported(String),
}
