//! Document text extraction.
//!
//! Turns an uploaded resume or job description binary into plain text.
//! Dispatch is by filename suffix; the content is never sniffed. Documents
//! with no extractable text (e.g. image-only PDFs) yield an empty string
//! rather than an error.

mod docx;
mod pdf;

use thiserror::Error;

#[cfg(test)]
pub(crate) use docx::fixture_docx;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Unsupported file type. Please upload PDF or DOCX files only.")]
    UnsupportedType,

    #[error("Failed to parse PDF file: {0}")]
    Pdf(String),

    #[error("Failed to parse DOCX file: {0}")]
    Docx(String),
}

/// Extracts plain text from an uploaded document.
pub fn extract_text(filename: &str, bytes: &[u8]) -> Result<String, ExtractError> {
    let name = filename.to_lowercase();
    if name.ends_with(".pdf") {
        pdf::extract(bytes)
    } else if name.ends_with(".docx") || name.ends_with(".doc") {
        docx::extract(bytes)
    } else {
        Err(ExtractError::UnsupportedType)
    }
}
