//! Ingredient normalization.
//!
//! Turns free-form text or a list of phrases into a set of canonical
//! ingredient tokens. Tokens are compared by exact equality afterwards,
//! so everything that should match has to be folded together here.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::{IngredientInput, IngredientSet};

/// Separators between phrases in free text.
static RE_SEPARATORS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\n,;]+").unwrap());

/// Anything that is not a lowercase ASCII letter, digit, or whitespace.
static RE_DISALLOWED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9\s]").unwrap());

static RE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Normalize either input shape into a token set.
pub fn normalize_ingredient_list(input: &IngredientInput) -> IngredientSet {
    match input {
        IngredientInput::FreeText(text) => normalize_text(text),
        IngredientInput::PhraseList(phrases) => normalize_phrases(phrases),
    }
}

/// Split free text on newlines, commas and semicolons, then normalize each piece.
pub fn normalize_text(text: &str) -> IngredientSet {
    RE_SEPARATORS
        .split(text)
        .filter(|piece| !piece.trim().is_empty())
        .filter_map(normalize_phrase)
        .collect()
}

/// Normalize each phrase of a list. Phrases are never split further.
pub fn normalize_phrases<I, S>(phrases: I) -> IngredientSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    phrases
        .into_iter()
        .filter_map(|p| normalize_phrase(p.as_ref()))
        .collect()
}

/// Normalize a single phrase into a token, or `None` if nothing survives.
///
/// The plural rule is deliberately naive: a trailing `es` is dropped,
/// otherwise a trailing `s`. Words like "hummus" come out as "hummu".
pub fn normalize_phrase(phrase: &str) -> Option<String> {
    let canonical = canonicalize_phrase(phrase);
    let token = strip_plural(&canonical);

    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

/// Case-fold, strip punctuation and collapse whitespace, without the plural rule.
pub fn canonicalize_phrase(phrase: &str) -> String {
    let lower = phrase.to_lowercase();
    let stripped = RE_DISALLOWED.replace_all(lower.trim(), "");
    let collapsed = RE_WHITESPACE.replace_all(&stripped, " ");
    collapsed.trim().to_string()
}

fn strip_plural(token: &str) -> &str {
    if let Some(stem) = token.strip_suffix("es") {
        stem
    } else if let Some(stem) = token.strip_suffix('s') {
        stem
    } else {
        token
    }
}
