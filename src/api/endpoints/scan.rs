//! Label scan endpoint: photo in, six salvage fields out.

use axum::extract::{Multipart, State};
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::label::{parse_label_text, NutrientFacts};

#[derive(Serialize)]
pub struct ScanResponse {
    pub scan_id: String,
    pub scanned_at: String,
    #[serde(flatten)]
    pub fields: NutrientFacts,
}

/// `POST /api/scan-label`, a multipart upload with one `image` part.
///
/// The OCR call runs on a blocking worker. The salvage pass itself never
/// fails: an unreadable or text-free photo comes back as six defaults, not
/// an error.
pub async fn scan_label(
    State(ctx): State<ApiContext>,
    mut multipart: Multipart,
) -> Result<Json<ScanResponse>, ApiError> {
    let ocr = ctx
        .ocr
        .clone()
        .ok_or(ApiError::NotConfigured("OCR engine"))?;

    let mut image: Option<Vec<u8>> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Malformed multipart body: {e}")))?
    {
        if field.name() == Some("image") {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| ApiError::BadRequest(format!("Could not read image part: {e}")))?;
            image = Some(bytes.to_vec());
        }
    }

    let image = image.ok_or_else(|| ApiError::BadRequest("Missing 'image' part".into()))?;
    if image.is_empty() {
        return Err(ApiError::BadRequest("Image part is empty".into()));
    }

    let scan_id = Uuid::new_v4().to_string();
    tracing::info!(scan_id = %scan_id, image_bytes = image.len(), "label scan received");

    let text = tokio::task::spawn_blocking(move || ocr.extract_text(&image))
        .await
        .map_err(|e| ApiError::Internal(format!("OCR task failed: {e}")))??;

    let fields = parse_label_text(&text);
    tracing::info!(scan_id = %scan_id, text_bytes = text.len(), "label scan resolved");

    Ok(Json(ScanResponse {
        scan_id,
        scanned_at: chrono::Utc::now().to_rfc3339(),
        fields,
    }))
}
