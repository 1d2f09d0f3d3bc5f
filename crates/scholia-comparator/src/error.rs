//! Error types for the Comparator

use thiserror::Error;

/// Errors that can occur while comparing summaries
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ComparatorError {
    /// Comparison needs at least two summary records
    #[error("Comparison requires at least 2 analyzed documents, found {found}")]
    InsufficientInput {
        /// Number of records available
        found: usize,
    },
}
