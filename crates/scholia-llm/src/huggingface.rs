//! Hugging Face Inference API Summarizer
//!
//! Provides integration with hosted summarization models such as
//! `facebook/bart-large-cnn` through the Hugging Face inference API.
//!
//! # Features
//!
//! - Async HTTP communication with the inference API
//! - Configurable endpoint, model and request timeout
//! - Bearer token authentication
//! - Blocking `Summarizer` implementation for use from worker threads
//!
//! Failed calls are reported, never retried; the caller decides whether a
//! missing summary matters.
//!
//! # Examples
//!
//! ```no_run
//! use scholia_llm::HuggingFaceSummarizer;
//!
//! let summarizer = HuggingFaceSummarizer::with_defaults("hf_xxx").unwrap();
//! ```

use crate::LlmError;
use scholia_domain::traits::Summarizer;
use scholia_domain::SummaryLength;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Default inference API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api-inference.huggingface.co";

/// Default summarization model
pub const DEFAULT_MODEL: &str = "facebook/bart-large-cnn";

/// Default timeout for a single request (60 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Summarizer backed by the Hugging Face inference API
#[derive(Debug, Clone)]
pub struct HuggingFaceSummarizer {
    endpoint: String,
    model: String,
    api_key: String,
    client: reqwest::Client,
}

/// Request body for the summarization task
#[derive(Debug, Serialize)]
struct SummarizationRequest<'a> {
    inputs: &'a str,
    parameters: SummarizationParameters,
}

#[derive(Debug, Serialize)]
struct SummarizationParameters {
    max_length: u32,
    min_length: u32,
    do_sample: bool,
}

/// One element of the summarization response array
#[derive(Debug, Deserialize)]
struct SummarizationOutput {
    summary_text: String,
}

/// Error body returned by the API on failure
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: String,
}

impl HuggingFaceSummarizer {
    /// Create a new summarizer
    ///
    /// # Parameters
    ///
    /// - `endpoint`: API base URL (e.g., "https://api-inference.huggingface.co")
    /// - `model`: Model identifier (e.g., "facebook/bart-large-cnn")
    /// - `api_key`: Hugging Face access token
    /// - `timeout`: Per-request timeout
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LlmError::Other(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            model: model.into(),
            api_key: api_key.into(),
            client,
        })
    }

    /// Create a summarizer for the default endpoint and model
    pub fn with_defaults(api_key: impl Into<String>) -> Result<Self, LlmError> {
        Self::new(
            DEFAULT_ENDPOINT,
            DEFAULT_MODEL,
            api_key,
            Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        )
    }

    /// URL of the model's inference route
    pub fn model_url(&self) -> String {
        format!("{}/models/{}", self.endpoint, self.model)
    }

    /// Summarize text using the inference API
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The token is missing or rejected
    /// - The model is unknown or still loading
    /// - The rate limit is hit
    /// - Network communication fails
    /// - Response format is invalid
    pub async fn summarize_async(
        &self,
        text: &str,
        length: SummaryLength,
    ) -> Result<String, LlmError> {
        let request_body = SummarizationRequest {
            inputs: text,
            parameters: SummarizationParameters {
                max_length: length.max,
                min_length: length.min,
                do_sample: false,
            },
        };

        debug!(
            "Summarizing {} chars with {} ({}-{} tokens)",
            text.len(),
            self.model,
            length.min,
            length.max
        );

        let response = self
            .client
            .post(self.model_url())
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| LlmError::Communication(format!("Request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| LlmError::Communication(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            return Err(self.status_error(status, &body));
        }

        parse_summary(&body)
    }

    fn status_error(&self, status: reqwest::StatusCode, body: &str) -> LlmError {
        let detail = serde_json::from_str::<ApiErrorBody>(body)
            .map(|b| b.error)
            .unwrap_or_else(|_| body.to_string());

        match status {
            reqwest::StatusCode::UNAUTHORIZED | reqwest::StatusCode::FORBIDDEN => {
                LlmError::Unauthorized(detail)
            }
            reqwest::StatusCode::NOT_FOUND | reqwest::StatusCode::SERVICE_UNAVAILABLE => {
                LlmError::ModelNotAvailable(format!("{}: {}", self.model, detail))
            }
            reqwest::StatusCode::TOO_MANY_REQUESTS => LlmError::RateLimitExceeded,
            _ => LlmError::Communication(format!("HTTP {}: {}", status, detail)),
        }
    }
}

/// Extract the first `summary_text` from a response body
fn parse_summary(body: &str) -> Result<String, LlmError> {
    let outputs: Vec<SummarizationOutput> = serde_json::from_str(body)
        .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

    outputs
        .into_iter()
        .next()
        .map(|o| o.summary_text)
        .ok_or_else(|| LlmError::InvalidResponse("Empty summary list".to_string()))
}

impl Summarizer for HuggingFaceSummarizer {
    type Error = LlmError;

    /// Blocking wrapper around [`HuggingFaceSummarizer::summarize_async`]
    ///
    /// Must be called from a blocking-capable thread: either outside any
    /// runtime or from `tokio::task::spawn_blocking`.
    fn summarize(&self, text: &str, length: SummaryLength) -> Result<String, Self::Error> {
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => handle.block_on(self.summarize_async(text, length)),
            Err(_) => tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .map_err(|e| LlmError::Other(format!("Failed to start runtime: {}", e)))?
                .block_on(self.summarize_async(text, length)),
        }
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
