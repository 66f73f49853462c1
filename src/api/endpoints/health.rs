//! Health check endpoint.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub ocr_configured: bool,
    pub lookup_configured: bool,
}

/// `GET /api/health` reports liveness plus collaborator wiring.
pub async fn check(State(ctx): State<ApiContext>) -> Result<Json<HealthResponse>, ApiError> {
    Ok(Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        ocr_configured: ctx.ocr.is_some(),
        lookup_configured: ctx.chat.is_some(),
    }))
}
