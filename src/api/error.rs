//! API error types with structured JSON responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::lookup::LookupError;
use crate::ocr::OcrError;
use crate::score::ScoreError;

/// Structured error response body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: &'static str,
    pub message: String,
}

/// API-level errors with HTTP status mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid request: {0}")]
    BadRequest(String),
    #[error("{0} is not configured")]
    NotConfigured(&'static str),
    #[error("Upstream service unreachable: {0}")]
    Unreachable(String),
    #[error("Upstream service failed: {0}")]
    Upstream(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::BadRequest(detail) => {
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", detail.clone())
            }
            ApiError::NotConfigured(service) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "NOT_CONFIGURED",
                format!("{service} is not configured on this server"),
            ),
            ApiError::Unreachable(detail) => {
                tracing::error!(detail, "upstream service unreachable");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "UPSTREAM_UNREACHABLE",
                    detail.clone(),
                )
            }
            ApiError::Upstream(detail) => {
                tracing::error!(detail, "upstream service failed");
                (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR", detail.clone())
            }
            ApiError::Internal(detail) => {
                tracing::error!(detail, "API internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = ErrorBody {
            error: ErrorDetail { code, message },
        };

        (status, Json(body)).into_response()
    }
}

impl From<OcrError> for ApiError {
    fn from(err: OcrError) -> Self {
        match err {
            OcrError::NotConfigured => ApiError::NotConfigured("OCR engine"),
            OcrError::Connection(_) | OcrError::Timeout(_) => {
                ApiError::Unreachable(err.to_string())
            }
            OcrError::Rejected(detail) => ApiError::BadRequest(detail),
            OcrError::Transport(_) | OcrError::Api { .. } | OcrError::InvalidResponse(_) => {
                ApiError::Upstream(err.to_string())
            }
        }
    }
}

impl From<LookupError> for ApiError {
    fn from(err: LookupError) -> Self {
        match err {
            LookupError::NotConfigured => ApiError::NotConfigured("Food lookup"),
            LookupError::Connection(_) | LookupError::Timeout(_) => {
                ApiError::Unreachable(err.to_string())
            }
            LookupError::Transport(_)
            | LookupError::Api { .. }
            | LookupError::EmptyResponse
            | LookupError::InvalidJson(_) => ApiError::Upstream(err.to_string()),
        }
    }
}

impl From<ScoreError> for ApiError {
    fn from(err: ScoreError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}
