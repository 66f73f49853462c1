//! API router.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//! Routes are nested under `/api/`. Handlers read collaborators from
//! `State<ApiContext>`, so tests build the same router with mocks.

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::api::endpoints;
use crate::api::types::ApiContext;

/// Request body ceiling: room for a label photo plus multipart overhead.
const MAX_BODY_BYTES: usize = 12 * 1024 * 1024;

/// Build the API router.
///
/// The UI is served from another origin, so CORS is wide open here; this
/// API carries no credentials or cookies.
pub fn nutriscan_router(ctx: ApiContext) -> Router {
    let api = Router::new()
        .route("/health", get(endpoints::health::check))
        .route("/scan-label", post(endpoints::scan::scan_label))
        .route("/balance-score", post(endpoints::score::balance_score))
        .route("/food-lookup", post(endpoints::lookup::food_lookup))
        .with_state(ctx);

    Router::new()
        .nest("/api", api)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(CorsLayer::permissive())
}
