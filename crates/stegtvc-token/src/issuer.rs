//! Token issuance.

use crate::claims::TokenClaims;
use crate::error::TokenError;
use crate::signer::TokenSigner;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use stegtvc_audit::ChainLogger;

fn default_ttl() -> i64 {
    3600
}

fn default_audience() -> String {
    "stegverse".to_string()
}

/// A token issuance request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueRequest {
    /// Entity id (human or AI).
    pub subject: String,

    /// Role name, e.g. "guardian_ai" or "stegcore".
    pub role: String,

    /// Token lifetime in seconds. Must be positive.
    #[serde(default = "default_ttl")]
    pub ttl_seconds: i64,

    /// Intended audience.
    #[serde(default = "default_audience")]
    pub audience: String,
}

/// A successfully issued token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssuedToken {
    pub token: String,
    pub expires_in: i64,
    pub role: String,
    pub subject: String,
}

/// Issues signed tokens and records each issuance in the chainlog.
pub struct TokenIssuer {
    signer: Arc<dyn TokenSigner>,
    chainlog: ChainLogger,
}

impl TokenIssuer {
    pub fn new(signer: Arc<dyn TokenSigner>, chainlog: ChainLogger) -> Self {
        Self { signer, chainlog }
    }

    /// Issue a token for the given subject/role.
    ///
    /// An out-of-range ttl (non-positive, or large enough to overflow the
    /// expiry timestamp) is rejected before signing and before any
    /// chainlog write. Signer failure propagates; no partial token and no
    /// event is produced. The chainlog records the token's metadata, not
    /// the token itself.
    pub async fn issue(&self, req: IssueRequest) -> Result<IssuedToken, TokenError> {
        let claims = TokenClaims::new(&req.subject, &req.role, &req.audience, req.ttl_seconds)?;
        let token = self.signer.sign(&claims)?;

        self.chainlog
            .log_token_issued(&req.subject, &req.role, &req.audience, claims.exp)
            .await?;

        tracing::info!(subject = %req.subject, role = %req.role, expires_in = req.ttl_seconds, "token issued");

        Ok(IssuedToken {
            token,
            expires_in: req.ttl_seconds,
            role: req.role,
            subject: req.subject,
        })
    }
}
