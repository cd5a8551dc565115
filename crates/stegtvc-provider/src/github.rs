//! GitHub Models completion client.

use crate::client::{
    build_payload, extract_content, map_transport_error, CompletionClient, CompletionRequest,
    REQUEST_TIMEOUT,
};
use crate::error::ProviderError;
use async_trait::async_trait;
use stegtvc_core::Settings;

/// Client for the GitHub Models chat-completions API.
#[derive(Debug)]
pub struct GitHubModelsClient {
    endpoint: String,
    token: String,
    http: reqwest::Client,
}

impl GitHubModelsClient {
    /// Build a client with the request timeout applied. A client without
    /// the timeout must never be constructed, so builder failure is an
    /// error, not a fallback.
    pub fn new(
        endpoint: impl Into<String>,
        token: impl Into<String>,
    ) -> Result<Self, ProviderError> {
        let http = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            endpoint: endpoint.into(),
            token: token.into(),
            http,
        })
    }

    /// Build from settings. Requires `GITHUB_MODELS_TOKEN`.
    pub fn from_settings(settings: &Settings) -> Result<Self, ProviderError> {
        let token = settings
            .github_models_token
            .clone()
            .ok_or_else(|| ProviderError::MissingCredentials("GITHUB_MODELS_TOKEN".into()))?;
        Self::new(settings.github_models_url.clone(), token)
    }
}

#[async_trait]
impl CompletionClient for GitHubModelsClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, ProviderError> {
        let payload = build_payload(request);

        let response = self
            .http
            .post(&self.endpoint)
            .header("Accept", "application/json")
            .header("Authorization", format!("Bearer {}", self.token))
            .header("X-GitHub-Api-Version", "2022-11-28")
            .json(&payload)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if status.as_u16() >= 400 {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let body: serde_json::Value = response.json().await.map_err(map_transport_error)?;
        extract_content(&body)
    }

    fn provider_name(&self) -> &str {
        "github_models"
    }
}
