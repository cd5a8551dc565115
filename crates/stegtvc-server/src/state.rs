//! Shared application state.

use std::sync::Arc;
use stegtvc_audit::{logger::DEFAULT_CHAINLOG_PATH, ChainLogger};
use stegtvc_core::Settings;
use stegtvc_router::AiRouter;
use stegtvc_token::{HsSigner, TokenIssuer};

/// State handed to every request handler.
///
/// Settings are constructed once and shared by `Arc` handle; components
/// needing them hold the same handle. Reloading configuration means
/// building a fresh state.
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub chainlog: ChainLogger,
    pub issuer: Arc<TokenIssuer>,
    pub router: Arc<AiRouter>,
}

impl AppState {
    /// Build state from environment-sourced settings and the default
    /// chainlog location.
    pub fn from_env() -> anyhow::Result<Self> {
        let settings = Arc::new(Settings::from_env());
        let chainlog = ChainLogger::new(DEFAULT_CHAINLOG_PATH)?;
        Ok(Self::new(settings, chainlog))
    }

    pub fn new(settings: Arc<Settings>, chainlog: ChainLogger) -> Self {
        let signer = Arc::new(HsSigner::new(&settings.jwt_secret));
        let issuer = Arc::new(TokenIssuer::new(signer, chainlog.clone()));
        let router = Arc::new(AiRouter::new(settings.clone(), chainlog.clone()));

        Self {
            settings,
            chainlog,
            issuer,
            router,
        }
    }
}
