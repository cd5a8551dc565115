//! Use-case → provider/model routing table.
//!
//! The table maps caller-supplied use-case labels to a provider/model pair
//! and always carries a `"default"` entry, so resolution can never come up
//! empty. A table can also be built from a fetched JSON document; fetched
//! configuration is parsed as inert data and validated, never executed.

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A provider/model pair selected for a use-case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelSelection {
    pub provider: String,
    pub model: String,
}

impl ModelSelection {
    pub fn new(provider: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            model: model.into(),
        }
    }
}

/// Mapping from use-case name to model selection, with a mandatory
/// default entry. Keys are case-sensitive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UseCaseTable {
    default: ModelSelection,
    #[serde(default)]
    use_cases: HashMap<String, ModelSelection>,
}

impl UseCaseTable {
    /// Build a table from explicit entries. Fails if any key is empty:
    /// a malformed table is a configuration error, fatal at startup.
    pub fn new(
        default: ModelSelection,
        use_cases: HashMap<String, ModelSelection>,
    ) -> Result<Self, CoreError> {
        if use_cases.keys().any(|k| k.is_empty()) {
            return Err(CoreError::EmptyUseCaseKey);
        }
        Ok(Self { default, use_cases })
    }

    /// Parse a table from a JSON document of the shape
    /// `{"default": {...}, "use_cases": {...}}`.
    ///
    /// The document is treated as inert data: it is deserialized and
    /// validated, nothing in it is evaluated.
    pub fn from_json(raw: &str) -> Result<Self, CoreError> {
        #[derive(Deserialize)]
        struct Document {
            default: Option<ModelSelection>,
            #[serde(default)]
            use_cases: HashMap<String, ModelSelection>,
        }

        let doc: Document = serde_json::from_str(raw)?;
        let default = doc.default.ok_or(CoreError::MissingDefault)?;
        Self::new(default, doc.use_cases)
    }

    /// Resolve a use-case to its entry, falling back to the default.
    pub fn resolve(&self, use_case: &str) -> &ModelSelection {
        self.use_cases.get(use_case).unwrap_or(&self.default)
    }

    /// The default entry.
    pub fn default_selection(&self) -> &ModelSelection {
        &self.default
    }
}

impl Default for UseCaseTable {
    /// Built-in routing table shipped with the service.
    fn default() -> Self {
        let mut use_cases = HashMap::new();
        use_cases.insert(
            "code-review".to_string(),
            ModelSelection::new("github-models", "gpt-5"),
        );
        use_cases.insert(
            "connectivity-check".to_string(),
            ModelSelection::new("github-models", "gpt-5-mini"),
        );
        use_cases.insert(
            "documentation".to_string(),
            ModelSelection::new("github-models", "gpt-4o-mini"),
        );

        Self {
            default: ModelSelection::new("github-models", "gpt-5-mini"),
            use_cases,
        }
    }
}
