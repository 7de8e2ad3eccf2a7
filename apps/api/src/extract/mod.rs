//! File-input boundary: upload validation and simulated text extraction.
//!
//! Only two content types are accepted and uploads are capped at 10 MB; both
//! checks report the exact messages the browser client shows inline.
//! Extraction itself is simulated: each accepted format maps to a fixed
//! example resume. Real PDF/DOCX parsing is deliberately out of scope.

pub mod handlers;

use crate::coaching::mock;
use crate::errors::AppError;

pub const PDF_MIME: &str = "application/pdf";
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// 10 MB upload cap, checked after the content type.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Accepted upload formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    Pdf,
    Docx,
}

impl UploadKind {
    pub fn from_mime(content_type: &str) -> Option<Self> {
        match content_type {
            PDF_MIME => Some(UploadKind::Pdf),
            DOCX_MIME => Some(UploadKind::Docx),
            _ => None,
        }
    }
}

/// Validates an upload's declared content type and size, in that order.
/// The messages are user-facing and fixed.
pub fn validate_upload(content_type: &str, size: usize) -> Result<UploadKind, AppError> {
    let kind = UploadKind::from_mime(content_type).ok_or_else(|| {
        AppError::Validation("Please upload a PDF or DOCX file".to_string())
    })?;

    if size > MAX_UPLOAD_BYTES {
        return Err(AppError::Validation(
            "File size should be less than 10MB".to_string(),
        ));
    }

    Ok(kind)
}

/// Simulated extraction: returns the fixed example resume for the format.
pub fn extract_text(kind: UploadKind) -> &'static str {
    match kind {
        UploadKind::Pdf => mock::SAMPLE_RESUME_PDF,
        UploadKind::Docx => mock::SAMPLE_RESUME_DOCX,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(err: AppError) -> String {
        match err {
            AppError::Validation(msg) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_plain_text_upload_rejected_with_exact_message() {
        let err = validate_upload("text/plain", 1024).unwrap_err();
        assert_eq!(message(err), "Please upload a PDF or DOCX file");
    }

    #[test]
    fn test_oversized_pdf_rejected_with_exact_message() {
        let fifteen_mb = 15 * 1024 * 1024;
        let err = validate_upload(PDF_MIME, fifteen_mb).unwrap_err();
        assert_eq!(message(err), "File size should be less than 10MB");
    }

    #[test]
    fn test_size_boundary() {
        assert!(validate_upload(PDF_MIME, MAX_UPLOAD_BYTES).is_ok());
        assert!(validate_upload(PDF_MIME, MAX_UPLOAD_BYTES + 1).is_err());
    }

    #[test]
    fn test_type_checked_before_size() {
        // An oversized file of the wrong type reports the type message
        let err = validate_upload("text/plain", 15 * 1024 * 1024).unwrap_err();
        assert_eq!(message(err), "Please upload a PDF or DOCX file");
    }

    #[test]
    fn test_both_accepted_types_extract_nonempty_text() {
        for (mime, kind) in [(PDF_MIME, UploadKind::Pdf), (DOCX_MIME, UploadKind::Docx)] {
            assert_eq!(validate_upload(mime, 1024).unwrap(), kind);
            assert!(!extract_text(kind).trim().is_empty());
        }
    }

    #[test]
    fn test_pdf_and_docx_samples_differ() {
        assert_ne!(extract_text(UploadKind::Pdf), extract_text(UploadKind::Docx));
    }
}
