//! # stegtvc-provider
//!
//! Clients for upstream chat-completion APIs.
//!
//! All clients implement [`CompletionClient`]: send one chat-completion
//! request built as `[optional system message, user message]`, return the
//! extracted completion text, or surface a [`ProviderError`] carrying the
//! upstream status code and raw body when the call fails. No retries are
//! performed anywhere; a failed call is surfaced immediately.

pub mod client;
pub mod error;
pub mod github;
pub mod openai;

pub use client::{CompletionClient, CompletionRequest};
pub use error::ProviderError;
pub use github::GitHubModelsClient;
pub use openai::OpenAiClient;

use std::sync::Arc;
use stegtvc_core::Settings;

/// Pick a completion client by provider name.
///
/// Recognizes the same aliases as settings-level provider normalization;
/// any other name is an [`ProviderError::Unsupported`].
pub fn client_for(
    provider: &str,
    settings: &Settings,
) -> Result<Arc<dyn CompletionClient>, ProviderError> {
    match provider {
        "github_models" | "github-models" | "github" => {
            Ok(Arc::new(GitHubModelsClient::from_settings(settings)?))
        }
        "openai" => Ok(Arc::new(OpenAiClient::from_settings(settings)?)),
        other => Err(ProviderError::Unsupported(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_provider_is_rejected() {
        let settings = Settings::default();
        let err = client_for("bedrock", &settings).unwrap_err();
        assert!(matches!(err, ProviderError::Unsupported(name) if name == "bedrock"));
    }

    #[test]
    fn github_models_requires_a_token() {
        let settings = Settings::default();
        let err = client_for("github_models", &settings).unwrap_err();
        assert!(matches!(err, ProviderError::MissingCredentials(_)));
    }

    #[test]
    fn client_construction_is_fallible_not_silently_degraded() {
        // Both constructors surface builder failure instead of falling
        // back to a client without the request timeout.
        let github: Result<GitHubModelsClient, ProviderError> =
            GitHubModelsClient::new("https://models.github.ai/inference/chat/completions", "tok");
        assert!(github.is_ok());

        let openai: Result<OpenAiClient, ProviderError> =
            OpenAiClient::new("https://api.openai.com/v1/chat/completions", "sk-test");
        assert!(openai.is_ok());
    }

    #[test]
    fn github_aliases_resolve_when_token_present() {
        let settings = Settings {
            github_models_token: Some("ghp_test".to_string()),
            ..Default::default()
        };
        for alias in ["github_models", "github-models", "github"] {
            let client = client_for(alias, &settings).unwrap();
            assert_eq!(client.provider_name(), "github_models");
        }
    }
}
