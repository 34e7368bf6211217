use super::{ExtractionError, TextExtractor};

/// Verbatim UTF-8 decode, the default path for .txt and anything
/// with an unrecognized extension.
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractionError> {
        String::from_utf8(bytes.to_vec()).map_err(|_| ExtractionError::InvalidUtf8)
    }
}
