//! # stegtvc-token
//!
//! Short-lived signed token issuance.
//!
//! [`TokenIssuer`] builds a claims set for a subject/role, delegates
//! signing to a [`TokenSigner`], and appends one `token_issued` event to
//! the chainlog. The shipped signer is [`HsSigner`] (HS256 over a
//! process-wide secret); the trait seam exists so deployments can swap in
//! a different signing backend.

pub mod claims;
pub mod error;
pub mod issuer;
pub mod signer;

pub use claims::TokenClaims;
pub use error::TokenError;
pub use issuer::{IssueRequest, IssuedToken, TokenIssuer};
pub use signer::{HsSigner, TokenSigner};
