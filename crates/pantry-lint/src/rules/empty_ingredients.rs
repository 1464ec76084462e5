//! Rule: empty-ingredients
//!
//! A recipe with no ingredient left after normalization always scores 0
//! and is never missing anything, so it floats to the top of every ranking.

use pantry_core::{normalize_phrases, Recipe};

use crate::{LintDiagnostic, LintRule, LintSeverity};

pub struct EmptyIngredientsRule;

impl LintRule for EmptyIngredientsRule {
    fn id(&self) -> &str {
        "empty-ingredients"
    }

    fn description(&self) -> &str {
        "Detects recipes with no usable ingredients"
    }

    fn default_severity(&self) -> LintSeverity {
        LintSeverity::Error
    }

    fn check(&self, catalog: &[Recipe]) -> Vec<LintDiagnostic> {
        catalog
            .iter()
            .enumerate()
            .filter(|(_, recipe)| normalize_phrases(&recipe.ingredients).is_empty())
            .map(|(index, recipe)| LintDiagnostic {
                rule: self.id().into(),
                severity: self.default_severity(),
                recipe: recipe.name.clone(),
                index,
                message: format!(
                    "Recipe \"{}\" has no ingredients after normalization ({} raw)",
                    recipe.name,
                    recipe.ingredients.len()
                ),
            })
            .collect()
    }
}
