//! Token claims.

use crate::error::TokenError;
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Claims carried by an issued token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Entity id (human or AI).
    pub sub: String,

    /// Role name, e.g. "guardian_ai" or "stegcore".
    pub role: String,

    /// Intended audience.
    pub aud: String,

    /// Issued-at, epoch seconds.
    pub iat: i64,

    /// Expiry, epoch seconds. Always `iat + ttl` with ttl > 0.
    pub exp: i64,
}

impl TokenClaims {
    /// Build claims for the given subject/role with `exp = now + ttl`.
    ///
    /// The ttl must be positive and `now + ttl` must be representable;
    /// anything else is a caller error, rejected here so `exp > iat`
    /// holds for every claims set that ever gets signed.
    pub fn new(
        subject: &str,
        role: &str,
        audience: &str,
        ttl_seconds: i64,
    ) -> Result<Self, TokenError> {
        if ttl_seconds <= 0 {
            return Err(TokenError::InvalidTtl { ttl: ttl_seconds });
        }

        let now = Utc::now().timestamp();
        let exp = now
            .checked_add(ttl_seconds)
            .ok_or(TokenError::InvalidTtl { ttl: ttl_seconds })?;

        Ok(Self {
            sub: subject.to_string(),
            role: role.to_string(),
            aud: audience.to_string(),
            iat: now,
            exp,
        })
    }

    /// Token lifetime in seconds.
    pub fn ttl(&self) -> i64 {
        self.exp - self.iat
    }
}
