//! Rule: lossy-plural
//!
//! The plural rule drops a trailing "s" unconditionally, which mangles
//! singular words such as "hummus" or "couscous". A user typing the same
//! word still matches, but a reader of the have/missing lists sees "hummu".

use pantry_core::{canonicalize_phrase, normalize_phrase, Recipe};

use crate::{LintDiagnostic, LintRule, LintSeverity};

/// Endings that are rarely plural.
const SINGULAR_ENDINGS: [&str; 3] = ["us", "ss", "is"];

pub struct LossyPluralRule;

impl LintRule for LossyPluralRule {
    fn id(&self) -> &str {
        "lossy-plural"
    }

    fn description(&self) -> &str {
        "Detects singular ingredients mangled by plural stripping"
    }

    fn default_severity(&self) -> LintSeverity {
        LintSeverity::Info
    }

    fn check(&self, catalog: &[Recipe]) -> Vec<LintDiagnostic> {
        let mut diagnostics = Vec::new();

        for (index, recipe) in catalog.iter().enumerate() {
            for raw in &recipe.ingredients {
                let canonical = canonicalize_phrase(raw);
                if SINGULAR_ENDINGS.iter().any(|e| canonical.ends_with(e)) {
                    let token = normalize_phrase(raw).unwrap_or_default();
                    diagnostics.push(LintDiagnostic {
                        rule: self.id().into(),
                        severity: self.default_severity(),
                        recipe: recipe.name.clone(),
                        index,
                        message: format!(
                            "Ingredient \"{}\" in \"{}\" is stored as \"{}\"",
                            raw, recipe.name, token
                        ),
                    });
                }
            }
        }

        diagnostics
    }
}
