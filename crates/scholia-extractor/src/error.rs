//! Error types for the Extractor

use scholia_domain::DocumentFormat;
use thiserror::Error;

/// Errors that can occur while extracting text
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// The file extension is not one of the supported formats
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// The underlying parser failed
    #[error("Error reading {format}: {message}")]
    Extraction {
        /// Format being parsed
        format: DocumentFormat,
        /// Message from the underlying parser
        message: String,
    },
}

impl ExtractorError {
    pub(crate) fn extraction(format: DocumentFormat, message: impl ToString) -> Self {
        ExtractorError::Extraction {
            format,
            message: message.to_string(),
        }
    }
}
