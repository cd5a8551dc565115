//! The completion client seam and shared request/response plumbing.

use crate::error::ProviderError;
use async_trait::async_trait;
use serde_json::{json, Value};
use std::time::Duration;

/// Per-request timeout for upstream calls. A call past this deadline
/// fails with [`ProviderError::Timeout`] rather than hanging.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// One chat-completion request.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub model: String,
    pub prompt: String,
    pub system_prompt: Option<String>,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// Trait for upstream completion clients.
#[async_trait]
pub trait CompletionClient: Send + Sync + std::fmt::Debug {
    /// Send one completion request and return the extracted text.
    async fn complete(&self, request: &CompletionRequest) -> Result<String, ProviderError>;

    /// Normalized provider name, as recorded in the chainlog.
    fn provider_name(&self) -> &str;
}

/// Build the JSON payload for a chat-completions call.
///
/// The message list is `[optional system message, user message]`.
pub(crate) fn build_payload(request: &CompletionRequest) -> Value {
    let mut messages = Vec::new();
    if let Some(system) = &request.system_prompt {
        messages.push(json!({"role": "system", "content": system}));
    }
    messages.push(json!({"role": "user", "content": request.prompt}));

    json!({
        "model": request.model,
        "messages": messages,
        "max_tokens": request.max_tokens,
        "temperature": request.temperature,
    })
}

/// Extract `choices[0].message.content` from a chat-completions response.
pub(crate) fn extract_content(body: &Value) -> Result<String, ProviderError> {
    body.pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| {
            ProviderError::MalformedResponse("response missing choices[0].message.content".into())
        })
}

/// Map a transport error, distinguishing timeouts.
pub(crate) fn map_transport_error(err: reqwest::Error) -> ProviderError {
    if err.is_timeout() {
        ProviderError::Timeout
    } else {
        ProviderError::Http(err)
    }
}
