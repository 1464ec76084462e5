//! Catalog checks for recipes the matcher will score badly.
//!
//! Each rule looks at the whole catalog at once, since several checks
//! compare entries with each other. `pantry.config.yaml` can silence a
//! rule or change its severity.

mod rules;

use pantry_core::Recipe;
pub use rules::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ---------------------------------------------------------------------------
// Lint severity
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LintSeverity {
    Error,
    Warning,
    Info,
}

// ---------------------------------------------------------------------------
// Lint diagnostic
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LintDiagnostic {
    pub rule: String,
    pub severity: LintSeverity,
    /// Name of the offending recipe.
    pub recipe: String,
    /// Position of the recipe in the catalog.
    pub index: usize,
    pub message: String,
}

// ---------------------------------------------------------------------------
// Lint rule trait
// ---------------------------------------------------------------------------

/// One catalog check.
pub trait LintRule: Send + Sync {
    /// Kebab-case id used in config and reports.
    fn id(&self) -> &str;

    fn description(&self) -> &str;

    /// Severity when the config does not mention the rule.
    fn default_severity(&self) -> LintSeverity;

    /// Diagnostics carry the default severity; `Linter` overwrites it.
    fn check(&self, catalog: &[Recipe]) -> Vec<LintDiagnostic>;
}

// ---------------------------------------------------------------------------
// Lint configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleLevel {
    Off,
    #[default]
    Warn,
    Error,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LintConfig {
    #[serde(default)]
    pub rules: HashMap<String, RuleLevel>,
}

impl LintConfig {
    /// Effective severity of a rule, or `None` when the config turns it off.
    pub fn severity_for(&self, rule: &dyn LintRule) -> Option<LintSeverity> {
        match self.rules.get(rule.id()) {
            Some(RuleLevel::Off) => None,
            Some(RuleLevel::Warn) => Some(LintSeverity::Warning),
            Some(RuleLevel::Error) => Some(LintSeverity::Error),
            None => Some(rule.default_severity()),
        }
    }
}

// ---------------------------------------------------------------------------
// Linter engine
// ---------------------------------------------------------------------------

pub struct Linter {
    rules: Vec<Box<dyn LintRule>>,
    config: LintConfig,
}

impl Linter {
    /// A linter running every built-in rule.
    pub fn new(config: LintConfig) -> Self {
        Self {
            rules: builtin_rules(),
            config,
        }
    }

    pub fn rules(&self) -> &[Box<dyn LintRule>] {
        &self.rules
    }

    /// Run all enabled rules against the catalog, ordered by recipe position.
    pub fn lint(&self, catalog: &[Recipe]) -> Vec<LintDiagnostic> {
        let mut diagnostics = Vec::new();

        for rule in &self.rules {
            let Some(severity) = self.config.severity_for(rule.as_ref()) else {
                continue;
            };
            diagnostics.extend(rule.check(catalog).into_iter().map(|mut d| {
                d.severity = severity.clone();
                d
            }));
        }

        diagnostics.sort_by_key(|d| d.index);
        diagnostics
    }
}

impl Default for Linter {
    fn default() -> Self {
        Self::new(LintConfig::default())
    }
}

fn builtin_rules() -> Vec<Box<dyn LintRule>> {
    vec![
        Box::new(DuplicateNameRule),
        Box::new(EmptyIngredientsRule),
        Box::new(DuplicateIngredientRule),
        Box::new(LossyPluralRule),
    ]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pantry_core::{BundledCatalog, CatalogLoader};

    #[test]
    fn linter_empty_catalog() {
        let linter = Linter::default();
        assert!(linter.lint(&[]).is_empty());
    }

    #[test]
    fn bundled_catalog_is_clean() {
        let catalog = BundledCatalog.load().unwrap();
        let results = Linter::default().lint(&catalog);
        assert!(results.is_empty(), "unexpected diagnostics: {results:?}");
    }

    struct QuietRule;

    impl LintRule for QuietRule {
        fn id(&self) -> &str {
            "quiet-rule"
        }
        fn description(&self) -> &str {
            "reports nothing"
        }
        fn default_severity(&self) -> LintSeverity {
            LintSeverity::Info
        }
        fn check(&self, _catalog: &[Recipe]) -> Vec<LintDiagnostic> {
            vec![]
        }
    }

    #[test]
    fn severity_defaults_to_rule() {
        let config = LintConfig::default();
        assert_eq!(config.severity_for(&QuietRule), Some(LintSeverity::Info));
    }

    #[test]
    fn severity_follows_config_level() {
        let mut config = LintConfig::default();
        config.rules.insert("quiet-rule".into(), RuleLevel::Error);
        assert_eq!(config.severity_for(&QuietRule), Some(LintSeverity::Error));

        config.rules.insert("quiet-rule".into(), RuleLevel::Warn);
        assert_eq!(config.severity_for(&QuietRule), Some(LintSeverity::Warning));

        config.rules.insert("quiet-rule".into(), RuleLevel::Off);
        assert_eq!(config.severity_for(&QuietRule), None);
    }

    #[test]
    fn disabled_rule_is_skipped() {
        let catalog = vec![Recipe::new("Empty", &[])];
        let mut config = LintConfig::default();
        config
            .rules
            .insert("empty-ingredients".into(), RuleLevel::Off);
        assert!(Linter::new(config).lint(&catalog).is_empty());
    }

    #[test]
    fn diagnostics_follow_catalog_order() {
        let catalog = vec![
            Recipe::new("Wrap", &["Hummus"]),
            Recipe::new("Empty", &[]),
        ];
        let results = Linter::default().lint(&catalog);
        let indexes: Vec<usize> = results.iter().map(|d| d.index).collect();
        assert_eq!(indexes, vec![0, 1]);
    }
}
