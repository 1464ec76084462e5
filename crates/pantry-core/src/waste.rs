//! Food-waste estimate for a cooked recipe.

use crate::catalog::find_recipe;
use crate::constants::{FALLBACK_GRAMS_SAVED, GRAMS_PER_INGREDIENT, MIN_GRAMS_SAVED};
use crate::types::Recipe;

/// Estimate grams of food kept out of the bin by cooking `recipe_name`.
///
/// A non-zero `reported` amount is taken as is. Otherwise each catalog
/// ingredient counts for `GRAMS_PER_INGREDIENT`, never below
/// `MIN_GRAMS_SAVED`; unknown recipes get `FALLBACK_GRAMS_SAVED`.
pub fn estimate_grams_saved(catalog: &[Recipe], recipe_name: &str, reported: Option<u32>) -> u32 {
    if let Some(grams) = reported.filter(|g| *g > 0) {
        return grams;
    }

    match find_recipe(catalog, recipe_name) {
        Some(recipe) => {
            let count = u32::try_from(recipe.ingredients.len()).unwrap_or(u32::MAX);
            count.saturating_mul(GRAMS_PER_INGREDIENT).max(MIN_GRAMS_SAVED)
        }
        None => FALLBACK_GRAMS_SAVED,
    }
}
