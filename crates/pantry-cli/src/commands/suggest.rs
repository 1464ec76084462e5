use pantry_core::json_api::SuggestData;
use pantry_core::{normalize_text, suggest_recipes, CatalogLoader, ScoredRecipe};

pub fn run_suggest(
    text: &str,
    loader: &dyn CatalogLoader,
    top_k: usize,
    format: &str,
) -> Result<String, String> {
    let user = normalize_text(text);
    let recipes = suggest_recipes(&user, loader, top_k).map_err(|e| e.to_string())?;

    match format {
        "json" => {
            let data = SuggestData {
                ingredients: user.into_iter().collect(),
                recipes,
            };
            serde_json::to_string_pretty(&data)
                .map_err(|e| format!("JSON serialization error: {e}"))
        }
        _ => Ok(format_human(&recipes, user.len())),
    }
}

fn format_human(recipes: &[ScoredRecipe], ingredient_count: usize) -> String {
    let mut lines: Vec<String> = Vec::new();

    for (i, r) in recipes.iter().enumerate() {
        lines.push(format!(
            "{}. {} (score {}, missing {})",
            i + 1,
            r.recipe.name,
            r.score,
            r.missing_count
        ));
        lines.push(format!("   have: {}", join_or_none(&r.have)));
        lines.push(format!("   missing: {}", join_or_none(&r.missing)));
    }

    let recipe_word = if recipes.len() == 1 { "recipe" } else { "recipes" };
    let ingredient_word = if ingredient_count == 1 {
        "ingredient"
    } else {
        "ingredients"
    };
    lines.push(format!(
        "{} {recipe_word} for {ingredient_count} {ingredient_word}.",
        recipes.len()
    ));

    lines.join("\n")
}

fn join_or_none(tokens: &[String]) -> String {
    if tokens.is_empty() {
        "-".into()
    } else {
        tokens.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pantry_core::{Recipe, StaticCatalog};
    use pretty_assertions::assert_eq;

    fn catalog() -> StaticCatalog {
        StaticCatalog::new(vec![
            Recipe::new("Toast", &["Bread", "Butter"]),
            Recipe::new("Boiled Eggs", &["Eggs"]),
        ])
    }

    #[test]
    fn human_output() {
        let out = run_suggest("eggs, bread", &catalog(), 12, "human").unwrap();
        assert_eq!(
            out,
            "1. Boiled Eggs (score 1.03, missing 0)\n   have: egg\n   missing: -\n\
             2. Toast (score 0.5, missing 1)\n   have: bread\n   missing: butter\n\
             2 recipes for 2 ingredients."
        );
    }

    #[test]
    fn json_output() {
        let out = run_suggest("bread", &catalog(), 1, "json").unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["ingredients"], serde_json::json!(["bread"]));
        assert_eq!(value["recipes"].as_array().unwrap().len(), 1);
        assert_eq!(value["recipes"][0]["name"], "Toast");
    }

    #[test]
    fn singular_summary() {
        let out = run_suggest("bread", &catalog(), 1, "human").unwrap();
        assert!(out.ends_with("1 recipe for 1 ingredient."));
    }
}
