//! Core Analyzer implementation

use crate::chunking::TextChunker;
use crate::config::AnalyzerConfig;
use crate::error::AnalyzerError;
use crate::structure::StructureDetector;
use scholia_domain::text::{truncate_chars, word_count};
use scholia_domain::traits::Summarizer;
use scholia_domain::{Document, InsightMap, SectionMap, Session, SummaryLength, SummaryRecord};
use std::fmt::Display;
use std::sync::Arc;
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// Result of analyzing one document of a session
#[derive(Debug)]
pub struct AnalysisOutcome {
    /// Document name
    pub name: String,

    /// `Ok` when a record was stored for the document
    pub result: Result<(), AnalyzerError>,
}

impl AnalysisOutcome {
    /// Whether a record was stored
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// The Analyzer turns extracted document text into a [`SummaryRecord`]
///
/// Every summarization call runs on the blocking pool under the configured
/// timeout. A failed or timed-out call only drops the unit it was producing;
/// the rest of the record is still assembled.
pub struct Analyzer<S>
where
    S: Summarizer,
{
    summarizer: Arc<S>,
    config: AnalyzerConfig,
    chunker: TextChunker,
    detector: StructureDetector,
}

impl<S> Analyzer<S>
where
    S: Summarizer + Send + Sync + 'static,
    S::Error: Display,
{
    /// Create a new Analyzer, validating the configuration
    pub fn new(summarizer: S, config: AnalyzerConfig) -> Result<Self, AnalyzerError> {
        config.validate().map_err(AnalyzerError::Config)?;

        let chunker = TextChunker::new(config.max_chunk_size).with_overlap(config.chunk_overlap);
        let detector = StructureDetector::from_config(&config);

        Ok(Self {
            summarizer: Arc::new(summarizer),
            config,
            chunker,
            detector,
        })
    }

    /// Create a new Analyzer with the default configuration
    pub fn with_defaults(summarizer: S) -> Self {
        let config = AnalyzerConfig::default();
        Self {
            summarizer: Arc::new(summarizer),
            chunker: TextChunker::new(config.max_chunk_size).with_overlap(config.chunk_overlap),
            detector: StructureDetector::from_config(&config),
            config,
        }
    }

    /// The active configuration
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Name of the underlying summarization model
    pub fn model_name(&self) -> &str {
        self.summarizer.model_name()
    }

    /// Build the summary record for one document
    pub async fn analyze(&self, document: &Document) -> Result<SummaryRecord, AnalyzerError> {
        let text = document.text().ok_or_else(|| AnalyzerError::MissingText {
            name: document.name().to_string(),
            reason: document
                .extraction_error()
                .unwrap_or("no text available")
                .to_string(),
        })?;

        self.analyze_text(document.name(), text).await
    }

    /// Build the summary record for raw text
    pub async fn analyze_text(
        &self,
        name: &str,
        text: &str,
    ) -> Result<SummaryRecord, AnalyzerError> {
        info!("Analyzing '{}' ({} chars)", name, text.chars().count());

        let executive = self.executive_summary(text).await;
        let sections = self.section_summaries(text).await;
        let insights = self.key_insights(text).await;

        info!(
            "Analysis of '{}' complete: executive {} chars, {} sections",
            name,
            executive.chars().count(),
            sections.len()
        );

        Ok(SummaryRecord {
            executive,
            sections,
            insights,
        })
    }

    /// Analyze every document of a session, storing a record per success
    ///
    /// Documents are processed sequentially in session order. A record
    /// already stored under the same name is replaced.
    pub async fn analyze_session(&self, session: &mut Session) -> Vec<AnalysisOutcome> {
        let total = session.documents().len();
        let mut outcomes = Vec::with_capacity(total);

        for idx in 0..total {
            let document = &session.documents()[idx];
            let name = document.name().to_string();
            info!("Analyzing document {}/{}: '{}'", idx + 1, total, name);

            let result = self.analyze(document).await;
            let result = match result {
                Ok(record) => {
                    session.replace_record(name.clone(), record);
                    Ok(())
                }
                Err(e) => {
                    warn!("Skipping '{}': {}", name, e);
                    Err(e)
                }
            };

            outcomes.push(AnalysisOutcome { name, result });
        }

        outcomes
    }

    /// Summarize the leading chunks of the text and join the results
    ///
    /// Only the first `executive_chunk_limit` chunks are candidates; of those,
    /// chunks with `min_words` words or fewer are skipped. Empty when no
    /// chunk qualifies.
    pub async fn executive_summary(&self, text: &str) -> String {
        let chunks = self.chunker.chunk(text);
        debug!("Text split into {} chunks", chunks.len());

        let mut summaries = Vec::new();
        let candidates = chunks.iter().take(self.config.executive_chunk_limit);
        for (idx, chunk) in candidates.enumerate() {
            if word_count(chunk) <= self.config.min_words {
                debug!("Chunk {} too short, skipping", idx + 1);
                continue;
            }

            let unit = format!("chunk {}", idx + 1);
            let length = self.config.executive_length.into();
            if let Some(summary) = self.summarize_unit(&unit, chunk, length).await {
                summaries.push(summary);
            }
        }

        summaries.join(" ")
    }

    /// Summarize each detected section
    ///
    /// Pieces sharing a label are summarized one by one; a later successful
    /// summary replaces an earlier one, a later failure leaves it in place.
    pub async fn section_summaries(&self, text: &str) -> SectionMap {
        let pieces = self.detector.section_pieces(text);
        debug!("Detected {} section pieces", pieces.len());

        let mut summaries = SectionMap::new();
        for (label, body) in pieces {
            let excerpt = truncate_chars(body, self.config.section_excerpt_chars);
            let length = self.config.section_length.into();
            if let Some(summary) = self.summarize_unit(&label, excerpt, length).await {
                summaries.insert(label, summary);
            }
        }

        summaries
    }

    /// Summarize the methodology, results and conclusions spans
    ///
    /// A kind whose span was not found, or whose summarization failed,
    /// stays empty.
    pub async fn key_insights(&self, text: &str) -> InsightMap {
        let spans = self.detector.detect_insights(text);

        let mut insights = InsightMap::new();
        for (kind, span) in spans.iter() {
            if span.is_empty() {
                debug!("No {} span found", kind);
                continue;
            }

            let length = self.config.insight_length.into();
            if let Some(summary) = self.summarize_unit(kind.as_str(), span, length).await {
                insights.set(kind, summary);
            }
        }

        insights
    }

    /// Summarize one unit, logging and discarding any failure
    async fn summarize_unit(
        &self,
        unit: &str,
        text: &str,
        length: SummaryLength,
    ) -> Option<String> {
        match self.call_summarizer(text, length).await {
            Ok(summary) => Some(summary),
            Err(e) => {
                warn!("Error summarizing {}: {}", unit, e);
                None
            }
        }
    }

    async fn call_summarizer(
        &self,
        text: &str,
        length: SummaryLength,
    ) -> Result<String, AnalyzerError> {
        let summarizer = Arc::clone(&self.summarizer);
        let text = text.to_string();

        // Summarizer is synchronous; a timed-out call keeps running detached
        let task = tokio::task::spawn_blocking(move || {
            summarizer
                .summarize(&text, length)
                .map_err(|e| AnalyzerError::Summarization(e.to_string()))
        });

        timeout(self.config.summarize_timeout(), task)
            .await
            .map_err(|_| AnalyzerError::Timeout)?
            .map_err(|e| AnalyzerError::Summarization(format!("Task join error: {}", e)))?
    }
}
