//! Chainlog logger facade.

use crate::error::AuditError;
use crate::event::ChainEvent;
use crate::storage::{AuditStorage, ConsoleStorage, FileStorage, NullStorage};
use std::path::Path;
use std::sync::Arc;

/// Default chainlog location, relative to the working directory.
pub const DEFAULT_CHAINLOG_PATH: &str = "data/runtime_chainlog.jsonl";

/// The chainlog writer shared by the token issuer and the AI router.
#[derive(Clone)]
pub struct ChainLogger {
    storage: Arc<dyn AuditStorage>,
}

impl ChainLogger {
    /// Create a file-backed logger at the given path.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, AuditError> {
        Ok(Self {
            storage: Arc::new(FileStorage::new(path)?),
        })
    }

    /// Create a logger with a custom storage backend.
    pub fn with_storage(storage: Arc<dyn AuditStorage>) -> Self {
        Self { storage }
    }

    /// Create a no-op logger.
    pub fn disabled() -> Self {
        Self {
            storage: Arc::new(NullStorage),
        }
    }

    /// Create a console-only logger (useful for development).
    pub fn console_only() -> Self {
        Self {
            storage: Arc::new(ConsoleStorage),
        }
    }

    /// Append one event to the chainlog.
    pub async fn log(&self, event: ChainEvent) -> Result<(), AuditError> {
        tracing::debug!(kind = event.kind(), "chainlog event");
        self.storage.store(&event).await
    }

    /// Append a `token_issued` event.
    pub async fn log_token_issued(
        &self,
        subject: &str,
        role: &str,
        audience: &str,
        expires_at: i64,
    ) -> Result<(), AuditError> {
        self.log(ChainEvent::token_issued(subject, role, audience, expires_at))
            .await
    }

    /// Append an `ai_invocation` event.
    pub async fn log_ai_invocation(
        &self,
        provider: &str,
        model: &str,
        trace_id: &str,
        trace_tag: Option<&str>,
    ) -> Result<(), AuditError> {
        self.log(ChainEvent::ai_invocation(
            provider,
            model,
            trace_id,
            trace_tag.map(str::to_string),
        ))
        .await
    }

    /// Read back all events in append order.
    pub async fn read_all(&self) -> Result<Vec<ChainEvent>, AuditError> {
        self.storage.read_all().await
    }
}
