use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// ---------------------------------------------------------------------------
// Ingredient input / tokens
// ---------------------------------------------------------------------------

/// A set of normalized ingredient tokens. Iterates in ascending order.
pub type IngredientSet = BTreeSet<String>;

/// The two shapes of raw ingredient input.
///
/// Deserializes from either a JSON string (free text) or an array of strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IngredientInput {
    /// Phrases separated by newline, comma, or semicolon.
    FreeText(String),
    /// One phrase per element.
    PhraseList(Vec<String>),
}

impl Default for IngredientInput {
    fn default() -> Self {
        IngredientInput::FreeText(String::new())
    }
}

impl From<&str> for IngredientInput {
    fn from(text: &str) -> Self {
        IngredientInput::FreeText(text.to_string())
    }
}

impl From<String> for IngredientInput {
    fn from(text: String) -> Self {
        IngredientInput::FreeText(text)
    }
}

impl From<Vec<String>> for IngredientInput {
    fn from(phrases: Vec<String>) -> Self {
        IngredientInput::PhraseList(phrases)
    }
}

impl From<&[&str]> for IngredientInput {
    fn from(phrases: &[&str]) -> Self {
        IngredientInput::PhraseList(phrases.iter().map(|p| p.to_string()).collect())
    }
}

// ---------------------------------------------------------------------------
// Catalog records
// ---------------------------------------------------------------------------

/// A catalog entry. Fields other than `name` and `ingredients` are kept
/// verbatim in `extra` and re-emitted on serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Recipe {
    pub fn new(name: impl Into<String>, ingredients: &[&str]) -> Self {
        Self {
            name: name.into(),
            ingredients: ingredients.iter().map(|i| i.to_string()).collect(),
            extra: serde_json::Map::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Scoring output
// ---------------------------------------------------------------------------

/// Raw match of one recipe against a user ingredient set.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeScore {
    pub score: f64,
    pub have: Vec<String>,
    pub missing: Vec<String>,
}

/// Keys written by `ScoredRecipe` itself. Catalog fields with these names
/// are replaced, not repeated.
pub const SCORE_FIELDS: [&str; 4] = ["score", "have", "missing", "missing_count"];

/// A recipe together with how well it matches, as returned by `suggest`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredRecipe {
    #[serde(flatten)]
    pub recipe: Recipe,
    pub score: f64,
    pub have: Vec<String>,
    pub missing: Vec<String>,
    pub missing_count: usize,
}

impl ScoredRecipe {
    pub fn new(mut recipe: Recipe, result: RecipeScore) -> Self {
        for key in SCORE_FIELDS {
            recipe.extra.remove(key);
        }
        Self {
            recipe,
            score: result.score,
            missing_count: result.missing.len(),
            have: result.have,
            missing: result.missing,
        }
    }
}
