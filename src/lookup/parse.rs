//! Lenient decoding of the model's JSON reply.

use serde::Serialize;
use serde_json::Value;

use super::LookupError;

/// Typical-serving gram estimates for one food. Any field the model omits
/// or returns as something non-numeric stays `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct FoodMacros {
    pub protein: Option<f64>,
    pub fat: Option<f64>,
    pub total_carbs: Option<f64>,
    pub sugar: Option<f64>,
    pub fiber: Option<f64>,
}

/// Parse a chat completion into [`FoodMacros`]. The reply must be a JSON
/// object; inside it, both numbers and numeric strings count, anything else
/// is dropped per field.
pub fn parse_food_macros(raw: &str) -> Result<FoodMacros, LookupError> {
    let value: Value =
        serde_json::from_str(raw).map_err(|e| LookupError::InvalidJson(e.to_string()))?;
    let object = value
        .as_object()
        .ok_or_else(|| LookupError::InvalidJson("completion is not a JSON object".to_string()))?;

    Ok(FoodMacros {
        protein: grams_at(object.get("protein")),
        fat: grams_at(object.get("fat")),
        total_carbs: grams_at(object.get("carbs")),
        sugar: grams_at(object.get("sugar")),
        fiber: grams_at(object.get("fiber")),
    })
}

fn grams_at(value: Option<&Value>) -> Option<f64> {
    let value = value?;
    value
        .as_f64()
        .or_else(|| value.as_str().and_then(|s| s.trim().parse().ok()))
}
