//! OpenAI completion client.

use crate::client::{
    build_payload, extract_content, map_transport_error, CompletionClient, CompletionRequest,
    REQUEST_TIMEOUT,
};
use crate::error::ProviderError;
use async_trait::async_trait;
use stegtvc_core::Settings;

/// Client for the OpenAI chat-completions API.
#[derive(Debug)]
pub struct OpenAiClient {
    endpoint: String,
    api_key: String,
    http: reqwest::Client,
}

impl OpenAiClient {
    /// Build a client with the request timeout applied. A client without
    /// the timeout must never be constructed, so builder failure is an
    /// error, not a fallback.
    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, ProviderError> {
        let http = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            http,
        })
    }

    /// Build from settings. Requires `OPENAI_API_KEY`.
    pub fn from_settings(settings: &Settings) -> Result<Self, ProviderError> {
        let api_key = settings
            .openai_api_key
            .clone()
            .ok_or_else(|| ProviderError::MissingCredentials("OPENAI_API_KEY".into()))?;
        Self::new(settings.openai_url.clone(), api_key)
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, ProviderError> {
        let payload = build_payload(request);

        let response = self
            .http
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key))
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
        "openai"
    }
}
