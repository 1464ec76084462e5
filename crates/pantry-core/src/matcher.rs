use crate::catalog::CatalogLoader;
use crate::constants::{SCORE_PRECISION, STAPLES, STAPLE_BOOST};
use crate::error::EngineError;
use crate::normalizer::normalize_phrases;
use crate::types::*;

/// Score one recipe against the user's ingredient set.
///
/// `score` is coverage (matched / total recipe ingredients) plus a
/// `STAPLE_BOOST` per matched staple.
pub fn score_recipe(user: &IngredientSet, recipe: &Recipe) -> RecipeScore {
    let recipe_set = normalize_phrases(&recipe.ingredients);

    let have: Vec<String> = recipe_set.intersection(user).cloned().collect();
    let missing: Vec<String> = recipe_set.difference(user).cloned().collect();

    let coverage = have.len() as f64 / recipe_set.len().max(1) as f64;
    let staples = have.iter().filter(|t| STAPLES.contains(t.as_str())).count();
    let score = coverage + staples as f64 * STAPLE_BOOST;

    RecipeScore {
        score,
        have,
        missing,
    }
}

/// Rank a catalog snapshot against the user's ingredients.
///
/// Ordering: fewest missing ingredients first, then highest rounded score,
/// then catalog order.
pub fn suggest(user: &IngredientSet, catalog: &[Recipe], top_k: usize) -> Vec<ScoredRecipe> {
    let mut scored: Vec<ScoredRecipe> = catalog
        .iter()
        .map(|recipe| {
            let mut result = score_recipe(user, recipe);
            result.score = round_score(result.score);
            ScoredRecipe::new(recipe.clone(), result)
        })
        .collect();

    // sort_by is stable: full ties stay in catalog order
    scored.sort_by(|a, b| {
        a.missing_count
            .cmp(&b.missing_count)
            .then_with(|| b.score.total_cmp(&a.score))
    });
    scored.truncate(top_k);
    scored
}

/// Load the catalog through `loader` and rank it.
pub fn suggest_recipes(
    user: &IngredientSet,
    loader: &dyn CatalogLoader,
    top_k: usize,
) -> Result<Vec<ScoredRecipe>, EngineError> {
    let catalog = loader.load()?;
    Ok(suggest(user, &catalog, top_k))
}

fn round_score(score: f64) -> f64 {
    let factor = 10f64.powi(SCORE_PRECISION);
    (score * factor).round() / factor
}
