//! Production OCR engine backed by a Google Cloud Vision-style REST API.
//!
//! One `images:annotate` call with the `TEXT_DETECTION` feature per image;
//! the response's assembled text annotation becomes the raw input of the
//! salvage engine.

use std::sync::OnceLock;

use base64::Engine as _;
use serde::Deserialize;

use super::engine::OcrEngine;
use super::OcrError;

/// HTTP client for the Vision text-detection endpoint.
pub struct VisionOcrClient {
    endpoint: String,
    api_key: String,
    client: OnceLock<reqwest::blocking::Client>,
    timeout_secs: u64,
}

impl VisionOcrClient {
    pub fn new(endpoint: &str, api_key: &str, timeout_secs: u64) -> Self {
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            client: OnceLock::new(),
            timeout_secs,
        }
    }

    /// Building a blocking reqwest client spins up (and drops) an internal
    /// runtime, which panics inside an async context. The client is built on
    /// first use, on the blocking thread running the request; `new` must stay
    /// runtime-free so startup wiring can happen anywhere.
    fn http_client(&self) -> &reqwest::blocking::Client {
        self.client.get_or_init(|| {
            reqwest::blocking::Client::builder()
                .timeout(std::time::Duration::from_secs(self.timeout_secs))
                .build()
                .expect("Failed to create HTTP client")
        })
    }
}

#[derive(Deserialize)]
struct AnnotateResponse {
    #[serde(default)]
    responses: Vec<AnnotateImageResponse>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct AnnotateImageResponse {
    full_text_annotation: Option<FullTextAnnotation>,
    #[serde(default)]
    text_annotations: Vec<TextAnnotation>,
    error: Option<AnnotateStatus>,
}

#[derive(Deserialize)]
struct FullTextAnnotation {
    text: String,
}

#[derive(Deserialize)]
struct TextAnnotation {
    description: String,
}

#[derive(Deserialize)]
struct AnnotateStatus {
    #[serde(default)]
    message: String,
}

impl OcrEngine for VisionOcrClient {
    fn extract_text(&self, image: &[u8]) -> Result<String, OcrError> {
        let _span = tracing::info_span!("vision_ocr", image_size = image.len()).entered();
        let start = std::time::Instant::now();

        // The key travels as a query parameter; keep it out of every log line.
        let url = format!("{}/v1/images:annotate?key={}", self.endpoint, self.api_key);
        let body = serde_json::json!({
            "requests": [{
                "image": { "content": base64::engine::general_purpose::STANDARD.encode(image) },
                "features": [{ "type": "TEXT_DETECTION" }],
            }]
        });

        let response = self.http_client().post(&url).json(&body).send().map_err(|e| {
            if e.is_connect() {
                OcrError::Connection(self.endpoint.clone())
            } else if e.is_timeout() {
                OcrError::Timeout(self.timeout_secs)
            } else {
                OcrError::Transport(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().unwrap_or_default();
            return Err(OcrError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: AnnotateResponse = response
            .json()
            .map_err(|e| OcrError::InvalidResponse(e.to_string()))?;

        let image_response = parsed
            .responses
            .into_iter()
            .next()
            .ok_or_else(|| OcrError::InvalidResponse("empty responses array".to_string()))?;

        let text = annotation_text(image_response)?;

        tracing::info!(
            elapsed_ms = %start.elapsed().as_millis(),
            text_len = text.len(),
            "label text extracted"
        );
        Ok(text)
    }
}

/// Pull the full text out of one image response. A per-image error from the
/// service means the image itself was unusable, not that the service failed.
fn annotation_text(response: AnnotateImageResponse) -> Result<String, OcrError> {
    if let Some(error) = response.error {
        return Err(OcrError::Rejected(error.message));
    }

    if let Some(full) = response.full_text_annotation {
        return Ok(full.text);
    }
    // The first text annotation is the whole detected block; the rest are
    // per-word boxes.
    Ok(response
        .text_annotations
        .into_iter()
        .next()
        .map(|a| a.description)
        .unwrap_or_default())
}
