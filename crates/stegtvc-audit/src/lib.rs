//! # stegtvc-audit
//!
//! The chainlog: an append-only record of token issuances and AI
//! invocations, one JSON object per line.
//!
//! ## Event Types
//!
//! | Event | Recorded fields |
//! |-------|-----------------|
//! | `token_issued` | subject, role, audience, expires_at, ts |
//! | `ai_invocation` | provider, model, trace_id, trace_tag, ts |
//!
//! Issued token strings are never written to the log, only their metadata.
//! Events are never mutated or deleted once written; the file is created
//! lazily on first append and only ever grows.
//!
//! ## Example
//!
//! ```rust,no_run
//! use stegtvc_audit::{ChainEvent, ChainLogger};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let logger = ChainLogger::new("data/runtime_chainlog.jsonl")?;
//! logger
//!     .log_token_issued("guardian_ai", "stegcore", "stegverse", 1_900_000_000)
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod event;
pub mod logger;
pub mod storage;

pub use error::AuditError;
pub use event::ChainEvent;
pub use logger::ChainLogger;
pub use storage::{AuditStorage, ConsoleStorage, FileStorage, NullStorage};
