//! End-to-end chainlog behavior across token issuance and AI invocation.

use async_trait::async_trait;
use std::sync::Arc;
use stegtvc_audit::{ChainEvent, ChainLogger};
use stegtvc_core::Settings;
use stegtvc_provider::{CompletionClient, CompletionRequest, ProviderError};
use stegtvc_router::{AiRequest, AiRouter};
use stegtvc_token::{HsSigner, IssueRequest, TokenIssuer};

#[derive(Debug)]
struct CannedClient;

#[async_trait]
impl CompletionClient for CannedClient {
    async fn complete(&self, _request: &CompletionRequest) -> Result<String, ProviderError> {
        Ok("all systems nominal".to_string())
    }

    fn provider_name(&self) -> &str {
        "github_models"
    }
}

fn ai_request(tag: &str) -> AiRequest {
    serde_json::from_value(serde_json::json!({
        "prompt": "status check",
        "trace_tag": tag,
    }))
    .unwrap()
}

#[tokio::test]
async fn issuance_and_invocations_append_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let chainlog = ChainLogger::new(dir.path().join("runtime_chainlog.jsonl")).unwrap();
    let settings = Arc::new(Settings::default());

    let issuer = TokenIssuer::new(Arc::new(HsSigner::new(&settings.jwt_secret)), chainlog.clone());
    let router = AiRouter::new(settings, chainlog.clone());

    let issued = issuer
        .issue(IssueRequest {
            subject: "guardian_ai".to_string(),
            role: "stegcore".to_string(),
            ttl_seconds: 1800,
            audience: "stegverse".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(issued.expires_in, 1800);

    let first = router
        .execute_with(ai_request("check-1"), &CannedClient)
        .await
        .unwrap();
    let second = router
        .execute_with(ai_request("check-2"), &CannedClient)
        .await
        .unwrap();
    assert_ne!(first.trace_id, second.trace_id);

    let events = chainlog.read_all().await.unwrap();
    assert_eq!(events.len(), 3);

    match &events[0] {
        ChainEvent::TokenIssued { subject, role, .. } => {
            assert_eq!(subject, "guardian_ai");
            assert_eq!(role, "stegcore");
        }
        other => panic!("expected token_issued first, got {other:?}"),
    }
    match (&events[1], &events[2]) {
        (
            ChainEvent::AiInvocation {
                trace_id: t1,
                trace_tag: tag1,
                ..
            },
            ChainEvent::AiInvocation {
                trace_id: t2,
                trace_tag: tag2,
                ..
            },
        ) => {
            assert_eq!(t1, &first.trace_id);
            assert_eq!(t2, &second.trace_id);
            assert_eq!(tag1.as_deref(), Some("check-1"));
            assert_eq!(tag2.as_deref(), Some("check-2"));
        }
        other => panic!("expected two ai_invocation events, got {other:?}"),
    }
}
