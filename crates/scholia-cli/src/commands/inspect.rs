//! Inspect command implementation.

use crate::cli::FileArgs;
use crate::commands::analyze::read_document;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use scholia_analyzer::{AnalyzerConfig, StructureDetector, TextChunker};
use scholia_domain::text::word_count;
use scholia_domain::InsightMap;

/// Structure of a document as the analyzer would see it, without any
/// summarization.
#[derive(Debug, Clone)]
pub struct Inspection {
    /// Document name
    pub name: String,
    /// Character count of the extracted text
    pub chars: usize,
    /// Word count of the extracted text
    pub words: usize,
    /// `(chars, words)` per chunk
    pub chunks: Vec<(usize, usize)>,
    /// `(label, words)` per detected section
    pub sections: Vec<(String, usize)>,
    /// Raw insight spans
    pub insights: InsightMap,
}

impl Inspection {
    /// Inspect extracted text using the given analyzer settings.
    pub fn from_text(name: impl Into<String>, text: &str, config: &AnalyzerConfig) -> Self {
        let chunker = TextChunker::new(config.max_chunk_size).with_overlap(config.chunk_overlap);
        let detector = StructureDetector::from_config(config);

        let chunks = chunker
            .chunk(text)
            .iter()
            .map(|chunk| (chunk.chars().count(), word_count(chunk)))
            .collect();

        let sections = detector
            .detect_sections(text)
            .iter()
            .map(|(label, body)| (label.to_string(), word_count(body)))
            .collect();

        Self {
            name: name.into(),
            chars: text.chars().count(),
            words: word_count(text),
            chunks,
            sections,
            insights: detector.detect_insights(text),
        }
    }
}

/// Execute the inspect command.
pub fn execute_inspect(args: FileArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let document = read_document(&args.file)?;

    let text = match document.text() {
        Some(text) => text,
        None => {
            let reason = document.extraction_error().unwrap_or("no text extracted");
            return Err(CliError::InvalidInput(reason.to_string()));
        }
    };

    let inspection = Inspection::from_text(document.name(), text, &config.analyzer);
    println!("{}", formatter.format_inspection(&inspection)?);
    Ok(())
}
