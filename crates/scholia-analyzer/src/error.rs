//! Error types for the Analyzer

use thiserror::Error;

/// Errors that can occur while analyzing a document
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// The document has no extracted text to analyze
    #[error("No text extracted from '{name}': {reason}")]
    MissingText {
        /// Document name
        name: String,
        /// Why extraction failed
        reason: String,
    },

    /// The summarization backend failed
    #[error("Summarization error: {0}")]
    Summarization(String),

    /// A summarization call exceeded its time budget
    #[error("Summarization timeout")]
    Timeout,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
