//! Rule: duplicate-name
//!
//! Recipe names are used as display and lookup keys, so a name shared by
//! several entries makes favorites and cooked-history lookups ambiguous.

use std::collections::HashMap;

use pantry_core::Recipe;

use crate::{LintDiagnostic, LintRule, LintSeverity};

pub struct DuplicateNameRule;

impl LintRule for DuplicateNameRule {
    fn id(&self) -> &str {
        "duplicate-name"
    }

    fn description(&self) -> &str {
        "Detects recipe names used by more than one catalog entry"
    }

    fn default_severity(&self) -> LintSeverity {
        LintSeverity::Warning
    }

    fn check(&self, catalog: &[Recipe]) -> Vec<LintDiagnostic> {
        let mut diagnostics = Vec::new();
        let mut first_seen: HashMap<&str, usize> = HashMap::new();

        for (index, recipe) in catalog.iter().enumerate() {
            match first_seen.get(recipe.name.as_str()) {
                Some(&first) => diagnostics.push(LintDiagnostic {
                    rule: self.id().into(),
                    severity: self.default_severity(),
                    recipe: recipe.name.clone(),
                    index,
                    message: format!(
                        "Recipe name \"{}\" is already used by entry #{}",
                        recipe.name, first
                    ),
                }),
                None => {
                    first_seen.insert(&recipe.name, index);
                }
            }
        }

        diagnostics
    }
}
