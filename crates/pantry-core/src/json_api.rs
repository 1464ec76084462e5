//! JSON string API for embedding callers.
//!
//! Every function takes a JSON request string and returns a JSON envelope
//! `{ "success": bool, "data"?: ..., "error"?: string }`. Failures are
//! reported inside the envelope, never as a panic or `Err`.

use serde::{Deserialize, Serialize};

use crate::catalog::CatalogLoader;
use crate::constants::API_TOP_K;
use crate::matcher::suggest_recipes;
use crate::normalizer::normalize_ingredient_list;
use crate::types::*;

// ---------------------------------------------------------------------------
// Request types (deserialized from JSON input)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SuggestRequest {
    #[serde(default)]
    pub ingredients: IngredientInput,
    #[serde(default, rename = "topK")]
    pub top_k: Option<usize>,
}

// ---------------------------------------------------------------------------
// Response types (serialized to JSON output)
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SuggestData {
    pub ingredients: Vec<String>,
    pub recipes: Vec<ScoredRecipe>,
}

// ---------------------------------------------------------------------------
// Public API functions
// ---------------------------------------------------------------------------

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }

    /// Serialize the envelope. A serialization failure becomes a failure envelope.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| {
            serde_json::json!({
                "success": false,
                "error": format!("JSON serialization error: {e}"),
            })
            .to_string()
        })
    }
}

/// Normalize the request's ingredients and rank the loader's catalog.
///
/// Input: `{ "ingredients": "a, b" | ["a", "b"], "topK"?: number }`
pub fn suggest_envelope(
    request_json: &str,
    loader: &dyn CatalogLoader,
) -> ApiResponse<SuggestData> {
    let request = match parse_request(request_json) {
        Ok(r) => r,
        Err(message) => return ApiResponse::err(message),
    };

    let user = normalize_ingredient_list(&request.ingredients);
    let top_k = request.top_k.unwrap_or(API_TOP_K);

    match suggest_recipes(&user, loader, top_k) {
        Ok(recipes) => ApiResponse::ok(SuggestData {
            ingredients: user.into_iter().collect(),
            recipes,
        }),
        Err(e) => ApiResponse::err(e.to_string()),
    }
}

/// `suggest_envelope` rendered as a JSON string.
///
/// Output: envelope with `{ ingredients: [token], recipes: [ScoredRecipe] }`
pub fn suggest_to_json(request_json: &str, loader: &dyn CatalogLoader) -> String {
    suggest_envelope(request_json, loader).to_json()
}

/// Normalize the request's ingredients and return the sorted token list.
pub fn normalize_to_json(request_json: &str) -> String {
    let response = match parse_request(request_json) {
        Ok(request) => {
            let tokens: Vec<String> = normalize_ingredient_list(&request.ingredients)
                .into_iter()
                .collect();
            ApiResponse::ok(tokens)
        }
        Err(message) => ApiResponse::err(message),
    };
    response.to_json()
}

fn parse_request(request_json: &str) -> Result<SuggestRequest, String> {
    serde_json::from_str(request_json).map_err(|e| format!("Invalid request JSON: {e}"))
}
