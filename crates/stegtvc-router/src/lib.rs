//! # stegtvc-router
//!
//! Provider routing and AI invocation.
//!
//! Two operations live here:
//! - [`resolve_provider`]: a pure mapping from (use-case, importance) to a
//!   [`RoutingDecision`] holding provider, model and generation
//!   constraints. It never writes to the chainlog and never calls
//!   upstream.
//! - [`AiRouter::execute`]: generates a fresh trace id, delegates the
//!   completion call to a [`CompletionClient`], records one
//!   `ai_invocation` chainlog event, and returns the output.

pub mod decision;
pub mod error;
pub mod invoke;

pub use decision::{resolve_provider, GenerationConstraints, RoutingDecision};
pub use error::RouterError;
pub use invoke::{AiRequest, AiResponse, AiRouter};

pub use stegtvc_provider::CompletionClient;
