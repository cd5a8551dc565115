mod routes;
mod state;

use axum::{
    routing::{get, post},
    Router,
};
use state::AppState;
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let state = AppState::from_env()?;
    tracing::info!(
        version = %state.settings.service_version,
        provider = %state.settings.default_provider,
        "starting stegtvc-server"
    );

    let app = Router::new()
        .route("/health", get(routes::health))
        .route("/config/status", get(routes::config_status))
        .route("/tokens/issue", post(routes::issue_token))
        .route("/ai/route", post(routes::ai_route))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = std::env::var("STEGTVC_BIND").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    tracing::info!("stegtvc-server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
