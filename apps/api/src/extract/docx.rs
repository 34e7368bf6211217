use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;
use zip::ZipArchive;

use super::{ExtractionError, TextExtractor};

/// DOCX extraction: opens the OOXML ZIP container and stream-parses
/// `word/document.xml`.
///
/// Text runs (`<w:t>`) are collected in document order; each closed paragraph
/// (`</w:p>`) emits a newline. Explicit breaks and tabs inside runs are
/// preserved as `\n` and `\t`.
pub struct DocxExtractor;

impl TextExtractor for DocxExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractionError> {
        let mut archive = ZipArchive::new(Cursor::new(bytes))
            .map_err(|e| ExtractionError::Docx(e.to_string()))?;

        let mut xml = String::new();
        archive
            .by_name("word/document.xml")
            .map_err(|e| ExtractionError::Docx(e.to_string()))?
            .read_to_string(&mut xml)
            .map_err(|e| ExtractionError::Docx(e.to_string()))?;

        parse_document_xml(&xml)
    }
}

fn parse_document_xml(xml: &str) -> Result<String, ExtractionError> {
    let mut reader = Reader::from_str(xml);
    let mut out = String::new();
    let mut in_text_run = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) if e.name().as_ref() == b"w:t" => in_text_run = true,
            Ok(Event::End(ref e)) => match e.name().as_ref() {
                b"w:t" => in_text_run = false,
                b"w:p" => out.push('\n'),
                _ => {}
            },
            Ok(Event::Empty(ref e)) => match e.name().as_ref() {
                b"w:br" => out.push('\n'),
                b"w:tab" => out.push('\t'),
                _ => {}
            },
            Ok(Event::Text(ref t)) if in_text_run => {
                let text = t
                    .unescape()
                    .map_err(|e| ExtractionError::Docx(e.to_string()))?;
                out.push_str(&text);
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(ExtractionError::Docx(e.to_string())),
        }
    }

    Ok(out)
}
