//! Balance score endpoint.

use axum::Json;
use serde::Deserialize;

use crate::api::error::ApiError;
use crate::score::{score_macros, Anchor, MacroProfile, ScoreReport};

#[derive(Deserialize)]
pub struct BalanceScoreRequest {
    pub macros: MacroProfile,
    pub anchor: String,
}

/// `POST /api/balance-score` answers with the spike score, tier, and the
/// balanced counterpart anchored on the requested macro. Pure arithmetic,
/// no collaborators involved.
pub async fn balance_score(
    Json(req): Json<BalanceScoreRequest>,
) -> Result<Json<ScoreReport>, ApiError> {
    let anchor = Anchor::parse(&req.anchor)?;
    Ok(Json(score_macros(&req.macros, anchor)))
}
