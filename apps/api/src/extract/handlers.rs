//! Multipart upload handler for resume extraction.

use axum::{extract::Multipart, Json};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::extract::{extract_text, validate_upload};
use crate::session::Session;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractResponse {
    pub file_name: String,
    pub text: String,
}

/// POST /api/v1/resume/extract
///
/// Accepts a multipart form with a single `file` field, validates it, and
/// returns the extracted text.
pub async fn handle_extract(
    session: Session,
    mut multipart: Multipart,
) -> Result<Json<ExtractResponse>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid upload: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().unwrap_or("resume").to_string();
        let content_type = field.content_type().unwrap_or("").to_string();

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Invalid upload: {e}")))?;

        let kind = validate_upload(&content_type, data.len())?;
        let text = extract_text(kind);

        if text.trim().is_empty() {
            return Err(AppError::Validation(
                "Could not extract text from the file. Please try another file.".to_string(),
            ));
        }

        info!(
            "Extracted {} chars from '{}' ({} bytes) for session {}",
            text.len(),
            file_name,
            data.len(),
            session.id
        );

        return Ok(Json(ExtractResponse {
            file_name,
            text: text.to_string(),
        }));
    }

    Err(AppError::Validation(
        "Upload must include a 'file' field".to_string(),
    ))
}
