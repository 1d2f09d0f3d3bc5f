//! Scholia Summarization Provider Layer
//!
//! Pluggable summarization backends.
//!
//! # Architecture
//!
//! This crate provides implementations of the `Summarizer` trait from
//! `scholia-domain`. Every backend takes a text span plus a target
//! [`SummaryLength`] and returns a short abstractive summary.
//!
//! # Providers
//!
//! - `MockSummarizer`: Deterministic mock for testing
//! - `HuggingFaceSummarizer`: Hosted Hugging Face inference API
//!
//! # Examples
//!
//! ```
//! use scholia_llm::MockSummarizer;
//! use scholia_domain::traits::Summarizer;
//! use scholia_domain::SummaryLength;
//!
//! let summarizer = MockSummarizer::new("A short summary.");
//! let result = summarizer.summarize("long text", SummaryLength::EXECUTIVE).unwrap();
//! assert_eq!(result, "A short summary.");
//! ```

#![warn(missing_docs)]

pub mod huggingface;

use scholia_domain::traits::Summarizer;
use scholia_domain::SummaryLength;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use thiserror::Error;

pub use huggingface::HuggingFaceSummarizer;

/// Errors that can occur during summarization
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from the model
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Model not available (unknown or still loading)
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// API token missing or rejected
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

#[derive(Debug, Default)]
struct MockState {
    responses: HashMap<String, String>,
    failing_inputs: Vec<String>,
    failing_fragments: Vec<String>,
    calls: Vec<(String, SummaryLength)>,
}

/// Mock summarizer for deterministic testing
///
/// Returns pre-configured summaries without making any network calls.
/// Clones share state, so a clone handed to an analyzer still reports its
/// calls through the original.
///
/// # Examples
///
/// ```
/// use scholia_llm::MockSummarizer;
/// use scholia_domain::traits::Summarizer;
/// use scholia_domain::SummaryLength;
///
/// let mut summarizer = MockSummarizer::default();
/// summarizer.add_response("input one", "summary one");
/// summarizer.add_error_containing("broken");
///
/// assert_eq!(summarizer.summarize("input one", SummaryLength::SECTION).unwrap(), "summary one");
/// assert!(summarizer.summarize("a broken input", SummaryLength::SECTION).is_err());
/// assert_eq!(summarizer.call_count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct MockSummarizer {
    default_response: String,
    state: Arc<Mutex<MockState>>,
}

impl MockSummarizer {
    /// Create a mock returning the same summary for every input
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            state: Arc::new(Mutex::new(MockState::default())),
        }
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Add a specific summary for an exact input text
    pub fn add_response(&mut self, input: impl Into<String>, response: impl Into<String>) {
        self.state().responses.insert(input.into(), response.into());
    }

    /// Fail when the input is exactly `input`
    pub fn add_error(&mut self, input: impl Into<String>) {
        self.state().failing_inputs.push(input.into());
    }

    /// Fail whenever the input contains `fragment`
    pub fn add_error_containing(&mut self, fragment: impl Into<String>) {
        self.state().failing_fragments.push(fragment.into());
    }

    /// Number of times `summarize` was called
    pub fn call_count(&self) -> usize {
        self.state().calls.len()
    }

    /// Every `(input, length)` received, in call order
    pub fn calls(&self) -> Vec<(String, SummaryLength)> {
        self.state().calls.clone()
    }

    /// Forget recorded calls
    pub fn reset_calls(&self) {
        self.state().calls.clear();
    }
}

impl Default for MockSummarizer {
    fn default() -> Self {
        Self::new("Default mock summary")
    }
}

impl Summarizer for MockSummarizer {
    type Error = LlmError;

    fn summarize(&self, text: &str, length: SummaryLength) -> Result<String, Self::Error> {
        let mut state = self.state();
        state.calls.push((text.to_string(), length));

        let fails = state.failing_inputs.iter().any(|input| input == text)
            || state
                .failing_fragments
                .iter()
                .any(|fragment| text.contains(fragment.as_str()));
        if fails {
            return Err(LlmError::Other("Mock error".to_string()));
        }

        Ok(state
            .responses
            .get(text)
            .cloned()
            .unwrap_or_else(|| self.default_response.clone()))
    }

    fn model_name(&self) -> &str {
        "mock"
    }
}
