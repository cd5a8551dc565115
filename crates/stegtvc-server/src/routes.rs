//! Request handlers for the four boundary endpoints.

use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use stegtvc_core::load_policy_bundle;
use stegtvc_router::{AiRequest, AiResponse};
use stegtvc_token::{IssueRequest, IssuedToken, TokenError};

/// Health payload. Bundle-load failures are converted into a degraded or
/// error status rather than a failed response, since health checks must
/// always answer.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bundle_version: Option<i64>,
}

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    let status = match load_policy_bundle(&state.settings, None) {
        Ok(bundle) => HealthStatus {
            status: "ok".to_string(),
            message: "StegTVC core is running.".to_string(),
            bundle_version: bundle.version,
        },
        Err(e) => HealthStatus {
            status: "error".to_string(),
            message: format!("Failed to load policy bundle: {e}"),
            bundle_version: None,
        },
    };
    Json(status)
}

/// `GET /config/status`
pub async fn config_status(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, (StatusCode, String)> {
    let bundle = load_policy_bundle(&state.settings, None)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(Json(json!({
        "bundle_version": bundle.version,
        "bundle_path": bundle.path.display().to_string(),
        "integrity": bundle.integrity,
        "source": bundle.source,
    })))
}

/// `POST /tokens/issue`
pub async fn issue_token(
    State(state): State<AppState>,
    Json(req): Json<IssueRequest>,
) -> Result<Json<IssuedToken>, (StatusCode, String)> {
    match state.issuer.issue(req).await {
        Ok(issued) => Ok(Json(issued)),
        Err(e @ TokenError::InvalidTtl { .. }) => Err((StatusCode::BAD_REQUEST, e.to_string())),
        Err(e) => Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string())),
    }
}

/// `POST /ai/route`
pub async fn ai_route(
    State(state): State<AppState>,
    Json(req): Json<AiRequest>,
) -> Result<Json<AiResponse>, (StatusCode, String)> {
    state
        .router
        .execute(req)
        .await
        .map(Json)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use stegtvc_audit::ChainLogger;
    use stegtvc_core::Settings;

    fn state_with(settings: Settings, dir: &tempfile::TempDir) -> AppState {
        let chainlog = ChainLogger::new(dir.path().join("chainlog.jsonl")).unwrap();
        AppState::new(Arc::new(settings), chainlog)
    }

    #[tokio::test]
    async fn health_reports_error_with_resolved_path_when_bundle_absent() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent_bundle.json");
        let settings = Settings {
            bundle_path: Some(missing.clone()),
            ..Default::default()
        };

        let Json(status) = health(State(state_with(settings, &dir))).await;
        assert_eq!(status.status, "error");
        assert!(status.message.contains("absent_bundle.json"));
        assert!(status.bundle_version.is_none());
    }

    #[tokio::test]
    async fn health_reports_ok_with_bundle_version() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bundle.json");
        std::fs::write(&path, r#"{"version": 12, "integrity": {}}"#).unwrap();
        let settings = Settings {
            bundle_path: Some(path),
            ..Default::default()
        };

        let Json(status) = health(State(state_with(settings, &dir))).await;
        assert_eq!(status.status, "ok");
        assert_eq!(status.bundle_version, Some(12));
    }

    #[tokio::test]
    async fn config_status_surfaces_bundle_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bundle.json");
        std::fs::write(
            &path,
            r#"{"version": 4, "integrity": {"sha256": "abc"}, "source": "ci"}"#,
        )
        .unwrap();
        let settings = Settings {
            bundle_path: Some(path.clone()),
            ..Default::default()
        };

        let Json(body) = config_status(State(state_with(settings, &dir))).await.unwrap();
        assert_eq!(body["bundle_version"], 4);
        assert_eq!(body["integrity"]["sha256"], "abc");
        assert_eq!(body["source"], "ci");
        assert_eq!(body["bundle_path"], path.display().to_string());
    }

    #[tokio::test]
    async fn config_status_fails_with_underlying_message() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            bundle_path: Some(dir.path().join("gone.json")),
            ..Default::default()
        };

        let (code, message) = config_status(State(state_with(settings, &dir)))
            .await
            .map(|_| ())
            .unwrap_err();
        assert_eq!(code, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(message.contains("gone.json"));
    }

    #[tokio::test]
    async fn issue_token_rejects_non_positive_ttl_with_400() {
        let dir = tempfile::tempdir().unwrap();
        let state = state_with(Settings::default(), &dir);

        let req = IssueRequest {
            subject: "guardian_ai".to_string(),
            role: "stegcore".to_string(),
            ttl_seconds: 0,
            audience: "stegverse".to_string(),
        };
        let (code, _) = issue_token(State(state), Json(req)).await.map(|_| ()).unwrap_err();
        assert_eq!(code, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn issue_token_returns_issued_payload() {
        let dir = tempfile::tempdir().unwrap();
        let state = state_with(Settings::default(), &dir);

        let req = IssueRequest {
            subject: "guardian_ai".to_string(),
            role: "stegcore".to_string(),
            ttl_seconds: 3600,
            audience: "stegverse".to_string(),
        };
        let Json(issued) = issue_token(State(state), Json(req)).await.unwrap();
        assert_eq!(issued.expires_in, 3600);
        assert_eq!(issued.subject, "guardian_ai");
        assert!(!issued.token.is_empty());
    }

    #[tokio::test]
    async fn ai_route_surfaces_provider_failures_as_500() {
        let dir = tempfile::tempdir().unwrap();
        // No GITHUB_MODELS_TOKEN configured: client construction fails.
        let state = state_with(Settings::default(), &dir);

        let req: AiRequest = serde_json::from_str(r#"{"prompt": "ping"}"#).unwrap();
        let (code, message) = ai_route(State(state), Json(req)).await.map(|_| ()).unwrap_err();
        assert_eq!(code, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(message.contains("GITHUB_MODELS_TOKEN"));
    }
}
