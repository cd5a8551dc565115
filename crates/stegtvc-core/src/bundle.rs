//! Policy bundle loading.
//!
//! The policy bundle is an externally produced, versioned JSON document
//! describing roles, issuers and rotation policy. The loader reads it
//! verbatim; it does not verify integrity or parse the embedded YAML and
//! Markdown, which are passed through as opaque text for downstream
//! consumers. No caching: every call re-reads from disk, so external
//! updates are visible on the next load.

use crate::error::CoreError;
use crate::settings::Settings;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_BUNDLE_PATH: &str = "config/policy_bundle.json";

/// Opaque bundle content blocks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BundleContent {
    /// Role definitions, as unparsed YAML text.
    #[serde(default)]
    pub roles_yaml: String,

    /// Issuer definitions, as unparsed YAML text.
    #[serde(default)]
    pub issuers_yaml: String,

    /// Rotation policy, as unparsed Markdown text.
    #[serde(default)]
    pub rotation_markdown: String,
}

/// A loaded policy bundle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyBundle {
    /// Bundle version, if the document declares one.
    #[serde(default)]
    pub version: Option<i64>,

    /// Integrity block, passed through uninterpreted.
    #[serde(default)]
    pub integrity: serde_json::Value,

    /// Opaque content blocks.
    #[serde(default)]
    pub content: BundleContent,

    /// Declared source of the bundle, if any.
    #[serde(default)]
    pub source: Option<String>,

    /// The path the bundle was loaded from. Not part of the document.
    #[serde(skip)]
    pub path: PathBuf,
}

/// Load the policy bundle.
///
/// The effective path is resolved as: the `STEGTVC_BUNDLE_PATH` override
/// carried in [`Settings`], else the caller-supplied path, else the fixed
/// default location. An absent file is a [`CoreError::BundleNotFound`]
/// naming the resolved path; malformed JSON propagates as a parse error.
pub fn load_policy_bundle(
    settings: &Settings,
    path: Option<&Path>,
) -> Result<PolicyBundle, CoreError> {
    let resolved: PathBuf = settings
        .bundle_path
        .clone()
        .or_else(|| path.map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_BUNDLE_PATH));

    if !resolved.exists() {
        return Err(CoreError::BundleNotFound { path: resolved });
    }

    let raw = fs::read_to_string(&resolved)?;
    let mut bundle: PolicyBundle = serde_json::from_str(&raw)?;
    bundle.path = resolved;

    tracing::debug!(path = %bundle.path.display(), version = ?bundle.version, "loaded policy bundle");
    Ok(bundle)
}
