//! Document text extraction: PDF, DOCX, and plain text behind one trait.
//!
//! Every format gets its own extractor; `extract_text` picks one from the
//! uploaded filename and hands it the raw bytes. Extraction is read-only and
//! in-memory; uploaded bytes never touch disk.

pub mod docx;
pub mod pdf;
pub mod plain;

pub use docx::DocxExtractor;
pub use pdf::PdfExtractor;
pub use plain::PlainTextExtractor;

use thiserror::Error;

/// The bytes are structurally invalid for their declared format.
///
/// An empty or whitespace-only extraction result is NOT an extraction error;
/// the caller treats that as unusable input instead.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("invalid PDF document: {0}")]
    Pdf(String),

    #[error("invalid DOCX container: {0}")]
    Docx(String),

    #[error("plain-text document is not valid UTF-8")]
    InvalidUtf8,
}

/// Document format, inferred from the uploaded filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
    /// The fallback for any unrecognized extension.
    PlainText,
}

impl DocumentFormat {
    pub fn from_filename(filename: &str) -> Self {
        let lower = filename.to_lowercase();
        if lower.ends_with(".pdf") {
            DocumentFormat::Pdf
        } else if lower.ends_with(".docx") {
            DocumentFormat::Docx
        } else {
            DocumentFormat::PlainText
        }
    }
}

/// All format extractors implement this.
pub trait TextExtractor: Send + Sync {
    /// Extract plain text from raw document bytes.
    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractionError>;
}

/// Extracts plain text from `bytes`, dispatching on the filename extension.
pub fn extract_text(bytes: &[u8], filename: &str) -> Result<String, ExtractionError> {
    let extractor: &dyn TextExtractor = match DocumentFormat::from_filename(filename) {
        DocumentFormat::Pdf => &PdfExtractor,
        DocumentFormat::Docx => &DocxExtractor,
        DocumentFormat::PlainText => &PlainTextExtractor,
    };
    extractor.extract(bytes)
}
