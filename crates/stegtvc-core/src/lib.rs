//! # stegtvc-core
//!
//! Shared configuration and types for the StegTVC token vault and AI router.
//!
//! This crate provides:
//! - Process settings sourced from the environment ([`Settings`])
//! - Provider name normalization ([`ProviderConfig`])
//! - The use-case → provider/model routing table ([`UseCaseTable`])
//! - Policy bundle loading ([`PolicyBundle`], [`load_policy_bundle`])

pub mod bundle;
pub mod error;
pub mod routing_table;
pub mod settings;

pub use bundle::{load_policy_bundle, BundleContent, PolicyBundle};
pub use error::CoreError;
pub use routing_table::{ModelSelection, UseCaseTable};
pub use settings::{ProviderConfig, Settings};
