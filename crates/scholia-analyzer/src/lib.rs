//! Scholia Analyzer
//!
//! Turns extracted document text into a [`SummaryRecord`](scholia_domain::SummaryRecord).
//!
//! # Overview
//!
//! Three independent passes run over the same text:
//!
//! - **Executive summary**: the text is chunked on paragraph boundaries and
//!   the leading substantial chunks are summarized and joined
//! - **Section summaries**: heuristic header detection splits the text into
//!   labeled sections, each summarized from a bounded excerpt
//! - **Key insights**: keyword-anchored methodology, results and conclusions
//!   spans are summarized individually
//!
//! # Architecture
//!
//! ```text
//! Document text → TextChunker / StructureDetector → Summarizer → SummaryRecord
//! ```
//!
//! Summarization failures never abort a record: the failing unit is logged
//! and left out.
//!
//! # Example Usage
//!
//! ```no_run
//! use scholia_analyzer::{Analyzer, AnalyzerConfig};
//! use scholia_domain::{Document, DocumentFormat};
//! use scholia_llm::MockSummarizer;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let analyzer = Analyzer::new(MockSummarizer::new("summary"), AnalyzerConfig::default())?;
//!
//! let document = Document::extracted("notes.txt", DocumentFormat::Txt, vec![], "Some text.");
//! let record = analyzer.analyze(&document).await?;
//!
//! println!("Executive: {}", record.executive);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod analyzer;
mod chunking;
mod config;
mod error;
mod structure;


pub use analyzer::{AnalysisOutcome, Analyzer};
pub use chunking::TextChunker;
pub use config::{AnalyzerConfig, LengthSetting};
pub use error::AnalyzerError;
pub use structure::{detect_insights, detect_sections, StructureDetector};
