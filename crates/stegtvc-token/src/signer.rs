//! Token signing.

use crate::claims::TokenClaims;
use crate::error::TokenError;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};

/// Signing delegate: turns a claims set into a signed token string.
pub trait TokenSigner: Send + Sync {
    fn sign(&self, claims: &TokenClaims) -> Result<String, TokenError>;
}

/// HS256 signer keyed by a process-wide secret.
pub struct HsSigner {
    key: EncodingKey,
}

impl HsSigner {
    pub fn new(secret: &str) -> Self {
        Self {
            key: EncodingKey::from_secret(secret.as_bytes()),
        }
    }
}

impl TokenSigner for HsSigner {
    fn sign(&self, claims: &TokenClaims) -> Result<String, TokenError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.key)
            .map_err(|e| TokenError::SigningFailed(e.to_string()))
    }
}
