//! PDF text extraction backed by `lopdf`.

use lopdf::Document;
use tracing::{debug, warn};

use crate::types::AppResult;

/// Extract the text of every page, in page order, joined with newlines.
///
/// Pages go through [`page_text`], so a page lopdf rejects becomes an empty
/// string. Only a document that fails to load at all is an error.
pub fn extract_pdf_text(bytes: &[u8]) -> AppResult<String> {
    let doc = Document::load_mem(bytes)?;
    let pages = doc.get_pages();
    debug!(pages = pages.len(), bytes = bytes.len(), "Loaded PDF");

    let page_texts: Vec<String> = pages
        .keys()
        .map(|page_number| page_text(&doc, *page_number))
        .collect();

    Ok(page_texts.join("\n").trim().to_string())
}

/// Text of one page, or `""` when lopdf returns an error for it.
pub fn page_text(doc: &Document, page_number: u32) -> String {
    match doc.extract_text(&[page_number]) {
        Ok(text) => text,
        Err(e) => {
            warn!(page = page_number, error = %e, "Page text extraction failed, using empty text");
            String::new()
        }
    }
}
