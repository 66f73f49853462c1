//! Shared state for the API layer.

use std::sync::Arc;

use crate::lookup::ChatClient;
use crate::ocr::OcrEngine;

/// Shared context for all API routes.
///
/// Collaborators are optional: a missing API key leaves the slot `None` and
/// the matching endpoints answer NOT_CONFIGURED instead of the server
/// refusing to start.
#[derive(Clone)]
pub struct ApiContext {
    pub ocr: Option<Arc<dyn OcrEngine + Send + Sync>>,
    pub chat: Option<Arc<dyn ChatClient + Send + Sync>>,
}

impl ApiContext {
    pub fn new(
        ocr: Option<Arc<dyn OcrEngine + Send + Sync>>,
        chat: Option<Arc<dyn ChatClient + Send + Sync>>,
    ) -> Self {
        Self { ocr, chat }
    }

    /// Context with no collaborators wired up. Scoring still works; the scan
    /// and lookup endpoints answer NOT_CONFIGURED.
    pub fn unconfigured() -> Self {
        Self {
            ocr: None,
            chat: None,
        }
    }
}
