//! Process-wide settings.
//!
//! [`Settings`] is constructed once from the environment and passed around
//! by handle; it is never mutated after construction. Re-reading the
//! environment means building a fresh instance.

use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

const DEFAULT_SERVICE_VERSION: &str = "1.0.0";
const DEFAULT_PROVIDER: &str = "github_models";
const DEFAULT_MODEL: &str = "openai/gpt-4.1-mini";
const GITHUB_MODELS_URL: &str = "https://models.github.ai/inference/chat/completions";
const OPENAI_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Development-only signing secret. Must be overridden via
/// `STEGTVC_JWT_SECRET` in any non-development deployment.
const DEV_JWT_SECRET: &str = "dev-only-secret";

/// Immutable process configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Service version string reported by the HTTP layer.
    pub service_version: String,

    /// Public URL of this service, if deployed behind one.
    pub public_url: Option<String>,

    /// Default provider name, e.g. "github_models".
    pub default_provider: String,

    /// Default model id, e.g. "openai/gpt-4.1-mini".
    pub default_model: String,

    /// GitHub Models chat-completions endpoint.
    pub github_models_url: String,

    /// OpenAI chat-completions endpoint.
    pub openai_url: String,

    /// Bearer token for the GitHub Models API.
    #[serde(skip_serializing)]
    pub github_models_token: Option<String>,

    /// API key for the OpenAI API.
    #[serde(skip_serializing)]
    pub openai_api_key: Option<String>,

    /// HS256 signing secret for issued tokens.
    #[serde(skip_serializing)]
    pub jwt_secret: String,

    /// Override path for the policy bundle, if set.
    pub bundle_path: Option<PathBuf>,
}

impl Settings {
    /// Read settings from the environment, falling back to static defaults.
    pub fn from_env() -> Self {
        let jwt_secret =
            env::var("STEGTVC_JWT_SECRET").unwrap_or_else(|_| DEV_JWT_SECRET.to_string());
        if jwt_secret == DEV_JWT_SECRET {
            tracing::warn!("STEGTVC_JWT_SECRET not set, using insecure development secret");
        }

        Self {
            service_version: env::var("STEGTVC_SERVICE_VERSION")
                .unwrap_or_else(|_| DEFAULT_SERVICE_VERSION.to_string()),
            public_url: env::var("STEGTVC_PUBLIC_URL").ok(),
            default_provider: env::var("STEGTVC_DEFAULT_PROVIDER")
                .unwrap_or_else(|_| DEFAULT_PROVIDER.to_string()),
            default_model: env::var("STEGTVC_DEFAULT_MODEL")
                .unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            github_models_url: env::var("STEGTVC_GITHUB_MODELS_URL")
                .unwrap_or_else(|_| GITHUB_MODELS_URL.to_string()),
            openai_url: env::var("STEGTVC_OPENAI_URL").unwrap_or_else(|_| OPENAI_URL.to_string()),
            github_models_token: env::var("GITHUB_MODELS_TOKEN").ok(),
            openai_api_key: env::var("OPENAI_API_KEY").ok(),
            jwt_secret,
            bundle_path: env::var("STEGTVC_BUNDLE_PATH").ok().map(PathBuf::from),
        }
    }

    /// Resolve the configured default provider into a [`ProviderConfig`].
    ///
    /// Recognized aliases for GitHub Models and OpenAI map to their fixed
    /// endpoints; any other name is treated as opaque with no endpoint
    /// (the caller must supply one out of band).
    pub fn default_provider_config(&self) -> ProviderConfig {
        match self.default_provider.as_str() {
            "github_models" | "github-models" | "github" => ProviderConfig {
                name: "github_models".to_string(),
                model: self.default_model.clone(),
                endpoint: Some(self.github_models_url.clone()),
                notes: None,
            },
            "openai" => ProviderConfig {
                name: "openai".to_string(),
                model: self.default_model.clone(),
                endpoint: Some(self.openai_url.clone()),
                notes: None,
            },
            other => ProviderConfig {
                name: other.to_string(),
                model: self.default_model.clone(),
                endpoint: None,
                notes: Some("unrecognized provider; endpoint must be supplied".to_string()),
            },
        }
    }

    /// Whether the signing secret is still the development default.
    pub fn uses_dev_secret(&self) -> bool {
        self.jwt_secret == DEV_JWT_SECRET
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            service_version: DEFAULT_SERVICE_VERSION.to_string(),
            public_url: None,
            default_provider: DEFAULT_PROVIDER.to_string(),
            default_model: DEFAULT_MODEL.to_string(),
            github_models_url: GITHUB_MODELS_URL.to_string(),
            openai_url: OPENAI_URL.to_string(),
            github_models_token: None,
            openai_api_key: None,
            jwt_secret: DEV_JWT_SECRET.to_string(),
            bundle_path: None,
        }
    }
}

/// A resolved provider/model pair. Immutable once constructed; one
/// instance per resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Normalized provider name.
    pub name: String,

    /// Model id to request from the provider.
    pub model: String,

    /// Chat-completions endpoint, if the provider is recognized.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Free-form notes about the resolution.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
