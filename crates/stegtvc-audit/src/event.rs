//! Chainlog event types.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Current wall-clock time as epoch seconds with sub-second precision.
fn now_ts() -> f64 {
    Utc::now().timestamp_micros() as f64 / 1_000_000.0
}

/// A chainlog event. Tagged by `kind` in the serialized form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChainEvent {
    /// A signed token was issued. Records the token's metadata, never the
    /// token itself.
    TokenIssued {
        subject: String,
        role: String,
        audience: String,
        /// Token expiry, epoch seconds.
        expires_at: i64,
        /// Event time, epoch seconds. Defaults to creation time.
        #[serde(default = "now_ts")]
        ts: f64,
    },

    /// An AI completion call was routed upstream.
    AiInvocation {
        provider: String,
        model: String,
        /// Fresh identifier generated for this invocation.
        trace_id: String,
        /// Caller-supplied correlation tag, if any.
        #[serde(skip_serializing_if = "Option::is_none")]
        trace_tag: Option<String>,
        #[serde(default = "now_ts")]
        ts: f64,
    },
}

impl ChainEvent {
    /// Create a `token_issued` event stamped with the current time.
    pub fn token_issued(
        subject: impl Into<String>,
        role: impl Into<String>,
        audience: impl Into<String>,
        expires_at: i64,
    ) -> Self {
        Self::TokenIssued {
            subject: subject.into(),
            role: role.into(),
            audience: audience.into(),
            expires_at,
            ts: now_ts(),
        }
    }

    /// Create an `ai_invocation` event stamped with the current time.
    pub fn ai_invocation(
        provider: impl Into<String>,
        model: impl Into<String>,
        trace_id: impl Into<String>,
        trace_tag: Option<String>,
    ) -> Self {
        Self::AiInvocation {
            provider: provider.into(),
            model: model.into(),
            trace_id: trace_id.into(),
            trace_tag,
            ts: now_ts(),
        }
    }

    /// The event's timestamp, epoch seconds.
    pub fn ts(&self) -> f64 {
        match self {
            Self::TokenIssued { ts, .. } | Self::AiInvocation { ts, .. } => *ts,
        }
    }

    /// The serialized `kind` tag for this event.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::TokenIssued { .. } => "token_issued",
            Self::AiInvocation { .. } => "ai_invocation",
        }
    }
}
