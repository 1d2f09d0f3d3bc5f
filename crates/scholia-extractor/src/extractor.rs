//! Format dispatch and document loading

use crate::error::ExtractorError;
use crate::ooxml::{extract_docx, extract_pptx};
use crate::pdf::extract_pdf;
use scholia_domain::{Document, DocumentFormat};
use tracing::{debug, info, warn};

/// Extract plain text from raw bytes of a known format
pub fn extract(bytes: &[u8], format: DocumentFormat) -> Result<String, ExtractorError> {
    debug!("Extracting {} bytes as {}", bytes.len(), format);

    match format {
        DocumentFormat::Pdf => extract_pdf(bytes),
        DocumentFormat::Docx => extract_docx(bytes),
        DocumentFormat::Pptx => extract_pptx(bytes),
        DocumentFormat::Txt | DocumentFormat::Markdown => String::from_utf8(bytes.to_vec())
            .map_err(|e| ExtractorError::extraction(format, e)),
    }
}

/// Extract plain text, resolving the format from the file name's extension
pub fn extract_file_name(name: &str, bytes: &[u8]) -> Result<String, ExtractorError> {
    let format = DocumentFormat::from_file_name(name)
        .ok_or_else(|| ExtractorError::UnsupportedFormat(name.to_string()))?;
    extract(bytes, format)
}

/// Build a [`Document`] from an upload
///
/// Never fails: an unsupported extension or a parser error is recorded on
/// the returned document instead.
pub fn load_document(name: impl Into<String>, bytes: Vec<u8>) -> Document {
    let name = name.into();
    let format = DocumentFormat::from_file_name(&name);

    let result = format
        .ok_or_else(|| ExtractorError::UnsupportedFormat(name.clone()))
        .and_then(|format| extract(&bytes, format).map(|text| (format, text)));

    match result {
        Ok((format, text)) => {
            info!("Extracted {} chars from '{}'", text.chars().count(), name);
            Document::extracted(name, format, bytes, text)
        }
        Err(e) => {
            warn!("Failed to extract '{}': {}", name, e);
            Document::failed(name, format, bytes, e.to_string())
        }
    }
}
