use super::{ExtractionError, TextExtractor};

/// PDF extraction via the `pdf-extract` crate.
///
/// Pages are decoded individually and concatenated in page order. A page that
/// yields no extractable text (scanned image, empty page) contributes an
/// empty string instead of failing the whole document.
pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractionError> {
        let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)
            .map_err(|e| ExtractionError::Pdf(e.to_string()))?;
        Ok(pages.concat())
    }
}
