//! Food macro lookup endpoint.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::lookup::prompt::{build_lookup_prompt, LOOKUP_SYSTEM_PROMPT};
use crate::lookup::{parse_food_macros, FoodMacros};

/// Cap on the food name length. Anything longer is not a food name.
const MAX_FOOD_NAME_CHARS: usize = 200;

#[derive(Deserialize)]
pub struct FoodLookupRequest {
    pub food_name: String,
}

/// `POST /api/food-lookup` estimates typical-serving macros for a named
/// food. The chat call runs on a blocking worker; the model's reply is
/// parsed leniently, so partial answers come back with `null` fields.
pub async fn food_lookup(
    State(ctx): State<ApiContext>,
    Json(req): Json<FoodLookupRequest>,
) -> Result<Json<FoodMacros>, ApiError> {
    let food_name = req.food_name.trim().to_string();
    if food_name.is_empty() {
        return Err(ApiError::BadRequest("food_name cannot be empty".into()));
    }
    if food_name.chars().count() > MAX_FOOD_NAME_CHARS {
        return Err(ApiError::BadRequest(format!(
            "food_name too long (max {MAX_FOOD_NAME_CHARS} chars)"
        )));
    }

    let chat = ctx
        .chat
        .clone()
        .ok_or(ApiError::NotConfigured("Food lookup"))?;

    let user_prompt = build_lookup_prompt(&food_name);
    let completion = tokio::task::spawn_blocking(move || {
        chat.complete(LOOKUP_SYSTEM_PROMPT, &user_prompt)
    })
    .await
    .map_err(|e| ApiError::Internal(format!("Lookup task failed: {e}")))??;

    let macros = parse_food_macros(&completion)?;
    tracing::info!(food = %food_name, "food lookup resolved");

    Ok(Json(macros))
}
