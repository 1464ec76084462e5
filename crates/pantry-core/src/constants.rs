use std::collections::HashSet;
use std::sync::LazyLock;

/// Common ingredients that earn a small scoring bonus when the user has them.
pub static STAPLES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut s = HashSet::new();
    s.insert("onion");
    s.insert("garlic");
    s.insert("salt");
    s.insert("oil");
    s.insert("tomato");
    s.insert("rice");
    s.insert("egg");
    s.insert("flour");
    s
});

/// Score added per matched staple. Not normalized: scores may exceed 1.0.
pub const STAPLE_BOOST: f64 = 0.03;

/// Number of suggestions returned when the caller does not ask for a count.
pub const DEFAULT_TOP_K: usize = 12;

/// Number of suggestions returned by the JSON API when `topK` is absent.
pub const API_TOP_K: usize = 5;

/// Decimal places kept on a reported score.
pub const SCORE_PRECISION: i32 = 4;

// Waste estimate heuristics
pub const GRAMS_PER_INGREDIENT: u32 = 120;
pub const MIN_GRAMS_SAVED: u32 = 100;
pub const FALLBACK_GRAMS_SAVED: u32 = 250;
