//! Text Extraction
//!
//! Turns an uploaded notice or supporting working into plain text:
//! - PDF documents go through `lopdf`, page by page
//! - anything else is decoded as UTF-8, dropping invalid byte sequences

pub mod pdf;

pub use pdf::extract_pdf_text;

use tracing::{debug, info};

use crate::models::UploadedDocument;
use crate::types::AppResult;

/// How an upload will be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Text,
}

impl DocumentKind {
    /// Classify by the declared media type. Falls back to the file extension
    /// when the client sent no type or only `application/octet-stream`.
    pub fn detect(doc: &UploadedDocument) -> Self {
        let declared = doc
            .media_type
            .as_deref()
            .and_then(|m| m.parse::<mime::Mime>().ok())
            .filter(|m| m.essence_str() != mime::APPLICATION_OCTET_STREAM.essence_str());

        let is_pdf = match declared {
            Some(m) => is_pdf_mime(&m),
            None => doc
                .file_name
                .as_deref()
                .and_then(|name| mime_guess::from_path(name).first())
                .is_some_and(|m| is_pdf_mime(&m)),
        };

        if is_pdf {
            DocumentKind::Pdf
        } else {
            DocumentKind::Text
        }
    }
}

fn is_pdf_mime(m: &mime::Mime) -> bool {
    m.essence_str()
        .eq_ignore_ascii_case(mime::APPLICATION_PDF.essence_str())
}

/// Extract best-effort plain text from one uploaded document.
pub fn extract(doc: &UploadedDocument) -> AppResult<String> {
    let kind = DocumentKind::detect(doc);
    info!(
        file = %doc.display_name(),
        bytes = doc.bytes.len(),
        kind = ?kind,
        "Extracting text"
    );

    let text = match kind {
        DocumentKind::Pdf => extract_pdf_text(&doc.bytes)?,
        DocumentKind::Text => decode_text(&doc.bytes),
    };

    debug!(file = %doc.display_name(), chars = text.chars().count(), "Extraction finished");
    Ok(text)
}

/// Same as [`extract`], but a missing document is simply empty text.
pub fn extract_optional(doc: Option<&UploadedDocument>) -> AppResult<String> {
    match doc {
        Some(doc) => extract(doc),
        None => Ok(String::new()),
    }
}

/// Extract every document in order. The first failure aborts the pass.
pub fn extract_all(docs: &[UploadedDocument]) -> AppResult<Vec<String>> {
    docs.iter().map(extract).collect()
}

/// Decode bytes as UTF-8, silently dropping invalid sequences, and trim.
pub fn decode_text(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    let mut dropped = 0usize;

    for chunk in bytes.utf8_chunks() {
        out.push_str(chunk.valid());
        dropped += chunk.invalid().len();
    }

    if dropped > 0 {
        debug!(dropped_bytes = dropped, "Dropped invalid UTF-8 bytes");
    }

    out.trim().to_string()
}
