//! Routing decisions: importance-derived generation constraints.

use serde::{Deserialize, Serialize};
use stegtvc_core::{ProviderConfig, Settings};

/// Generation constraints derived from the importance tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationConstraints {
    pub max_tokens: u32,
    pub temperature: f32,
}

/// An ephemeral routing decision, computed per request and never
/// persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingDecision {
    pub provider: ProviderConfig,
    pub use_case: String,
    pub constraints: GenerationConstraints,
}

/// Constraints by importance tier. Case-sensitive, first match wins:
/// `"low"` → 600/0.3, `"high"` and `"critical"` → 1800/0.15, anything
/// else (including `"normal"` and unknown values) → 900/0.2.
pub fn constraints_for(importance: &str) -> GenerationConstraints {
    match importance {
        "low" => GenerationConstraints {
            max_tokens: 600,
            temperature: 0.3,
        },
        "high" | "critical" => GenerationConstraints {
            max_tokens: 1800,
            temperature: 0.15,
        },
        _ => GenerationConstraints {
            max_tokens: 900,
            temperature: 0.2,
        },
    }
}

/// Resolve a provider/model and constraints for a use-case.
///
/// Pure and side-effect free: no chainlog write, no upstream call.
///
/// The provider/model always come from the settings-level default, not
/// from the per-use-case table. The two routing mechanisms are not
/// composed here (known incompleteness, kept deliberately; unifying them
/// is pending a product decision).
pub fn resolve_provider(
    settings: &Settings,
    use_case: &str,
    importance: &str,
) -> RoutingDecision {
    RoutingDecision {
        provider: settings.default_provider_config(),
        use_case: use_case.to_string(),
        constraints: constraints_for(importance),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn low_importance_constraints() {
        let c = constraints_for("low");
        assert_eq!(c.max_tokens, 600);
        assert_eq!(c.temperature, 0.3);
    }

    #[test]
    fn high_and_critical_share_constraints() {
        for importance in ["high", "critical"] {
            let c = constraints_for(importance);
            assert_eq!(c.max_tokens, 1800);
            assert_eq!(c.temperature, 0.15);
        }
    }

    #[test]
    fn everything_else_gets_the_middle_tier() {
        for importance in ["normal", "", "urgent", "LOW", "High", "Critical"] {
            let c = constraints_for(importance);
            assert_eq!(c.max_tokens, 900, "importance {importance:?}");
            assert_eq!(c.temperature, 0.2);
        }
    }

    #[test]
    fn critical_code_review_uses_global_default_provider() {
        let settings = Settings::default();
        let decision = resolve_provider(&settings, "code-review", "critical");

        assert_eq!(decision.constraints.max_tokens, 1800);
        assert_eq!(decision.constraints.temperature, 0.15);
        // Provider/model come from the global default, not a per-use-case
        // entry.
        assert_eq!(decision.provider.name, "github_models");
        assert_eq!(decision.provider.model, settings.default_model);
        assert_eq!(decision.use_case, "code-review");
    }
}
