//! HTTP surface for the salvage engine and its collaborators.
//!
//! Routes are nested under `/api/`. [`nutriscan_router`] returns a
//! composable `Router` that can be mounted on any axum server instance, and
//! tests drive it in-process with mock collaborators.

pub mod endpoints;
pub mod error;
pub mod router;
pub mod types;

pub use error::ApiError;
pub use router::nutriscan_router;
pub use types::ApiContext;
