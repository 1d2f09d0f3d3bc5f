//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

use crate::summary::SummaryLength;

/// Trait for an abstractive summarization capability
///
/// Implemented by the infrastructure layer (scholia-llm). Calls are
/// blocking; callers that run inside an async runtime are expected to move
/// them onto a blocking thread.
pub trait Summarizer {
    /// Error type for summarization operations
    type Error;

    /// Summarize `text` to roughly `length` tokens
    fn summarize(&self, text: &str, length: SummaryLength) -> Result<String, Self::Error>;

    /// Human-readable name of the backing model
    fn model_name(&self) -> &str;
}
