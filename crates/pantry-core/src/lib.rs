pub mod catalog;
pub mod constants;
pub mod error;
pub mod json_api;
pub mod matcher;
pub mod normalizer;
pub mod types;
pub mod waste;

pub use catalog::{
    find_recipe, BundledCatalog, CachedCatalog, CatalogLoader, JsonCatalog, StaticCatalog,
};
pub use constants::{DEFAULT_TOP_K, STAPLES, STAPLE_BOOST};
pub use error::{CatalogError, EngineError};
pub use json_api::{normalize_to_json, suggest_envelope, suggest_to_json, ApiResponse, SuggestData};
pub use matcher::{score_recipe, suggest, suggest_recipes};
pub use normalizer::{
    canonicalize_phrase, normalize_ingredient_list, normalize_phrase, normalize_phrases,
    normalize_text,
};
pub use types::*;
pub use waste::estimate_grams_saved;
