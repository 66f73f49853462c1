//! Boundary to the external OCR service that turns label photos into text.
//!
//! The salvage engine itself never does I/O; everything network-shaped lives
//! behind the [`OcrEngine`] trait so the API layer can run against a mock.

pub mod engine;
pub mod vision;

pub use engine::{MockOcrEngine, OcrEngine};
pub use vision::VisionOcrClient;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum OcrError {
    #[error("OCR engine is not configured (missing API key)")]
    NotConfigured,

    #[error("Could not reach the OCR service at {0}")]
    Connection(String),

    #[error("OCR request timed out after {0}s")]
    Timeout(u64),

    #[error("OCR transport error: {0}")]
    Transport(String),

    #[error("OCR service error: status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("OCR service rejected the image: {0}")]
    Rejected(String),

    #[error("Could not parse the OCR service response: {0}")]
    InvalidResponse(String),
}
