use pantry_core::CatalogLoader;
use pantry_lint::{LintConfig, LintDiagnostic, LintSeverity, Linter};

/// Returns the rendered report and the number of error-severity diagnostics.
pub fn run_lint(
    loader: &dyn CatalogLoader,
    config: &LintConfig,
    format: &str,
) -> Result<(String, usize), String> {
    let catalog = loader.load().map_err(|e| e.to_string())?;

    let linter = Linter::new(config.clone());
    let results = linter.lint(&catalog);
    let error_count = results
        .iter()
        .filter(|d| d.severity == LintSeverity::Error)
        .count();

    let output = match format {
        "json" => serde_json::to_string_pretty(&serde_json::json!({
            "diagnostics": results,
            "summary": {
                "count": results.len(),
                "errors": error_count,
                "recipes": catalog.len(),
            }
        }))
        .map_err(|e| format!("JSON serialization error: {e}"))?,
        "sarif" => {
            let sarif = build_sarif(&results, &linter);
            serde_json::to_string_pretty(&sarif)
                .map_err(|e| format!("SARIF serialization error: {e}"))?
        }
        _ => {
            // Human-readable format
            let mut lines: Vec<String> = Vec::new();

            for d in &results {
                lines.push(format!(
                    "#{} {}: {}[{}]: {}",
                    d.index,
                    d.recipe,
                    severity_label(&d.severity),
                    d.rule,
                    d.message
                ));
            }

            let count = results.len();
            let recipe_count = catalog.len();
            let issue_word = if count == 1 { "issue" } else { "issues" };
            let recipe_word = if recipe_count == 1 { "recipe" } else { "recipes" };
            lines.push(format!(
                "{count} lint {issue_word} in {recipe_count} {recipe_word}."
            ));

            lines.join("\n")
        }
    };

    Ok((output, error_count))
}

fn severity_label(severity: &LintSeverity) -> &'static str {
    match severity {
        LintSeverity::Error => "error",
        LintSeverity::Warning => "warning",
        LintSeverity::Info => "info",
    }
}

fn sarif_level(severity: &LintSeverity) -> &'static str {
    match severity {
        LintSeverity::Error => "error",
        LintSeverity::Warning => "warning",
        LintSeverity::Info => "note",
    }
}

fn build_sarif(results: &[LintDiagnostic], linter: &Linter) -> serde_json::Value {
    let rule_descriptors: Vec<serde_json::Value> = linter
        .rules()
        .iter()
        .map(|r| {
            serde_json::json!({
                "id": r.id(),
                "shortDescription": { "text": r.description() },
                "defaultConfiguration": { "level": sarif_level(&r.default_severity()) }
            })
        })
        .collect();

    let sarif_results: Vec<serde_json::Value> = results
        .iter()
        .map(|d| {
            serde_json::json!({
                "ruleId": d.rule,
                "level": sarif_level(&d.severity),
                "message": { "text": d.message },
                "locations": [{
                    "logicalLocations": [{
                        "name": d.recipe,
                        "index": d.index,
                        "kind": "recipe"
                    }]
                }]
            })
        })
        .collect();

    serde_json::json!({
        "$schema": "https://raw.githubusercontent.com/oasis-tcs/sarif-spec/main/sarif-2.1/schema/sarif-schema-2.1.0.json",
        "version": "2.1.0",
        "runs": [{
            "tool": {
                "driver": {
                    "name": "pantry-lint",
                    "version": env!("CARGO_PKG_VERSION"),
                    "rules": rule_descriptors
                }
            },
            "results": sarif_results
        }]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pantry_core::{Recipe, StaticCatalog};
    use pantry_lint::RuleLevel;

    fn catalog() -> StaticCatalog {
        StaticCatalog::new(vec![
            Recipe::new("Wrap", &["Hummus", "Tortilla"]),
            Recipe::new("Empty", &[]),
        ])
    }

    #[test]
    fn human_report_counts_errors() {
        let (out, errors) = run_lint(&catalog(), &LintConfig::default(), "human").unwrap();
        assert_eq!(errors, 1);
        assert!(out.contains("#0 Wrap: info[lossy-plural]"));
        assert!(out.contains("#1 Empty: error[empty-ingredients]"));
        assert!(out.ends_with("2 lint issues in 2 recipes."));
    }

    #[test]
    fn config_can_silence_rules() {
        let mut config = LintConfig::default();
        config.rules.insert("empty-ingredients".into(), RuleLevel::Off);
        let (_, errors) = run_lint(&catalog(), &config, "human").unwrap();
        assert_eq!(errors, 0);
    }

    #[test]
    fn sarif_report_shape() {
        let (out, _) = run_lint(&catalog(), &LintConfig::default(), "sarif").unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["version"], "2.1.0");
        let run = &value["runs"][0];
        assert_eq!(run["tool"]["driver"]["rules"].as_array().unwrap().len(), 4);
        assert_eq!(run["results"][1]["level"], "error");
    }
}
