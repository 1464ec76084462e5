//! Rule: duplicate-ingredient
//!
//! Detects raw ingredients of one recipe that normalize to the same token,
//! e.g. "Tomato" and "Tomatoes". They count once when scoring.

use std::collections::BTreeMap;

use pantry_core::{normalize_phrase, Recipe};

use crate::{LintDiagnostic, LintRule, LintSeverity};

pub struct DuplicateIngredientRule;

impl LintRule for DuplicateIngredientRule {
    fn id(&self) -> &str {
        "duplicate-ingredient"
    }

    fn description(&self) -> &str {
        "Detects ingredients that collapse into the same token within a recipe"
    }

    fn default_severity(&self) -> LintSeverity {
        LintSeverity::Info
    }

    fn check(&self, catalog: &[Recipe]) -> Vec<LintDiagnostic> {
        let mut diagnostics = Vec::new();

        for (index, recipe) in catalog.iter().enumerate() {
            let mut by_token: BTreeMap<String, Vec<&str>> = BTreeMap::new();
            for raw in &recipe.ingredients {
                if let Some(token) = normalize_phrase(raw) {
                    by_token.entry(token).or_default().push(raw);
                }
            }

            for (token, raws) in by_token.iter().filter(|(_, raws)| raws.len() > 1) {
                diagnostics.push(LintDiagnostic {
                    rule: self.id().into(),
                    severity: self.default_severity(),
                    recipe: recipe.name.clone(),
                    index,
                    message: format!(
                        "Ingredients {} in \"{}\" all normalize to \"{}\"",
                        raws.iter()
                            .map(|r| format!("\"{r}\""))
                            .collect::<Vec<_>>()
                            .join(", "),
                        recipe.name,
                        token
                    ),
                });
            }
        }

        diagnostics
    }
}
