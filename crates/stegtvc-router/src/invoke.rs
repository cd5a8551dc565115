//! AI invocation: delegate a completion call and record it.

use crate::error::RouterError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use stegtvc_audit::ChainLogger;
use stegtvc_core::Settings;
use stegtvc_provider::{client_for, CompletionClient, CompletionRequest};
use uuid::Uuid;

fn default_provider() -> String {
    "github_models".to_string()
}

fn default_model() -> String {
    "openai/gpt-4.1".to_string()
}

fn default_max_tokens() -> u32 {
    512
}

fn default_temperature() -> f32 {
    0.2
}

/// An AI routing request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiRequest {
    #[serde(default = "default_provider")]
    pub provider: String,

    #[serde(default = "default_model")]
    pub model: String,

    pub prompt: String,

    #[serde(default)]
    pub system_prompt: Option<String>,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Optional tag for chainlog correlation.
    #[serde(default)]
    pub trace_tag: Option<String>,
}

/// The routed completion output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiResponse {
    pub provider: String,
    pub model: String,
    pub output: String,
    pub trace_id: String,
}

/// Routes AI requests to an upstream completion client and records each
/// invocation in the chainlog.
pub struct AiRouter {
    settings: Arc<Settings>,
    chainlog: ChainLogger,
}

impl AiRouter {
    pub fn new(settings: Arc<Settings>, chainlog: ChainLogger) -> Self {
        Self { settings, chainlog }
    }

    /// Execute an AI request via the client configured for its provider.
    pub async fn execute(&self, request: AiRequest) -> Result<AiResponse, RouterError> {
        let client = client_for(&request.provider, &self.settings)?;
        self.execute_with(request, client.as_ref()).await
    }

    /// Execute an AI request via an explicit client.
    ///
    /// A fresh trace id is generated for every invocation. The chainlog
    /// event is written after the delegate returns successfully and
    /// records attempt metadata only (provider, model, trace id, tag),
    /// never the output. Delegate failures propagate unchanged.
    pub async fn execute_with(
        &self,
        request: AiRequest,
        client: &dyn CompletionClient,
    ) -> Result<AiResponse, RouterError> {
        let trace_id = Uuid::new_v4().to_string();

        let completion = CompletionRequest {
            model: request.model.clone(),
            prompt: request.prompt,
            system_prompt: request.system_prompt,
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        };

        let output = client.complete(&completion).await?;

        self.chainlog
            .log_ai_invocation(
                &request.provider,
                &request.model,
                &trace_id,
                request.trace_tag.as_deref(),
            )
            .await?;

        tracing::info!(
            provider = %request.provider,
            model = %request.model,
            trace_id = %trace_id,
            "ai invocation routed"
        );

        Ok(AiResponse {
            provider: request.provider,
            model: request.model,
            output,
            trace_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashSet;
    use stegtvc_audit::ChainEvent;
    use stegtvc_provider::ProviderError;

    #[derive(Debug)]
    struct EchoClient;

    #[async_trait]
    impl CompletionClient for EchoClient {
        async fn complete(&self, request: &CompletionRequest) -> Result<String, ProviderError> {
            Ok(format!("echo: {}", request.prompt))
        }

        fn provider_name(&self) -> &str {
            "github_models"
        }
    }

    #[derive(Debug)]
    struct RateLimitedClient;

    #[async_trait]
    impl CompletionClient for RateLimitedClient {
        async fn complete(&self, _request: &CompletionRequest) -> Result<String, ProviderError> {
            Err(ProviderError::Upstream {
                status: 429,
                body: "rate limit exceeded".to_string(),
            })
        }

        fn provider_name(&self) -> &str {
            "github_models"
        }
    }

    fn request(prompt: &str) -> AiRequest {
        AiRequest {
            provider: "github_models".to_string(),
            model: "openai/gpt-4.1".to_string(),
            prompt: prompt.to_string(),
            system_prompt: None,
            max_tokens: 512,
            temperature: 0.2,
            trace_tag: Some("ci".to_string()),
        }
    }

    fn router(dir: &tempfile::TempDir) -> (AiRouter, ChainLogger) {
        let chainlog = ChainLogger::new(dir.path().join("chainlog.jsonl")).unwrap();
        (
            AiRouter::new(Arc::new(Settings::default()), chainlog.clone()),
            chainlog,
        )
    }

    #[tokio::test]
    async fn successful_call_logs_exactly_one_invocation() {
        let dir = tempfile::tempdir().unwrap();
        let (router, chainlog) = router(&dir);

        let response = router.execute_with(request("hello"), &EchoClient).await.unwrap();
        assert_eq!(response.output, "echo: hello");
        assert_eq!(response.provider, "github_models");
        assert!(!response.trace_id.is_empty());

        let events = chainlog.read_all().await.unwrap();
        assert_eq!(events.len(), 1);
        match &events[0] {
            ChainEvent::AiInvocation {
                trace_id,
                trace_tag,
                ..
            } => {
                assert_eq!(trace_id, &response.trace_id);
                assert_eq!(trace_tag.as_deref(), Some("ci"));
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[tokio::test]
    async fn trace_ids_are_fresh_per_invocation() {
        let dir = tempfile::tempdir().unwrap();
        let (router, _) = router(&dir);

        let mut seen = HashSet::new();
        for _ in 0..20 {
            let response = router.execute_with(request("x"), &EchoClient).await.unwrap();
            assert!(seen.insert(response.trace_id));
        }
    }

    #[tokio::test]
    async fn upstream_429_propagates_with_status_and_body() {
        let dir = tempfile::tempdir().unwrap();
        let (router, chainlog) = router(&dir);

        let err = router
            .execute_with(request("hello"), &RateLimitedClient)
            .await
            .unwrap_err();
        match err {
            RouterError::Provider(ProviderError::Upstream { status, body }) => {
                assert_eq!(status, 429);
                assert!(body.contains("rate limit"));
            }
            other => panic!("unexpected error: {other:?}"),
        }

        // No event claims a successful invocation that never happened.
        assert!(chainlog.read_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn unknown_provider_is_rejected_without_logging() {
        let dir = tempfile::tempdir().unwrap();
        let (router, chainlog) = router(&dir);

        let mut req = request("hello");
        req.provider = "bedrock".to_string();
        let err = router.execute(req).await.unwrap_err();
        assert!(matches!(
            err,
            RouterError::Provider(ProviderError::Unsupported(_))
        ));
        assert!(chainlog.read_all().await.unwrap().is_empty());
    }

    #[test]
    fn request_defaults_fill_absent_fields() {
        let req: AiRequest = serde_json::from_str(r#"{"prompt": "hi"}"#).unwrap();
        assert_eq!(req.provider, "github_models");
        assert_eq!(req.model, "openai/gpt-4.1");
        assert_eq!(req.max_tokens, 512);
        assert_eq!(req.temperature, 0.2);
        assert!(req.trace_tag.is_none());
    }
}
