//! Heuristic section and insight detection
//!
//! Both detectors are approximate by nature: they look at capitalization,
//! numbering and a handful of keywords, not at document semantics. Expect
//! false positives and misses on real papers.

use crate::config::AnalyzerConfig;
use regex::Regex;
use scholia_domain::text::{truncate_chars, word_count};
use scholia_domain::{InsightKind, InsightMap, SectionMap};
use std::sync::LazyLock;

/// A section starts on a line beginning with an uppercase letter whose run of
/// non-lowercase characters ends in a colon, or with "N. " and a capital
static SECTION_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\A(?:[A-Z][^a-z]*:|\d+\.\s+[A-Z])").expect("section header pattern")
});

static METHODOLOGY_KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)method|approach|technique").expect("methodology pattern"));
static METHODOLOGY_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)result|conclusion|\n\n").expect("methodology end pattern"));

static RESULTS_KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)result|finding|outcome").expect("results pattern"));
static RESULTS_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)conclusion|discussion|\n\n").expect("results end pattern"));

static CONCLUSIONS_KEYWORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)conclusion|summary|implication").expect("conclusions pattern")
});

/// Finds candidate sections and keyword-anchored insight spans
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructureDetector {
    max_sections: usize,
    min_words: usize,
    label_chars: usize,
    insight_chars: usize,
}

impl StructureDetector {
    /// Create a detector from analyzer settings
    pub fn from_config(config: &AnalyzerConfig) -> Self {
        Self {
            max_sections: config.max_sections,
            min_words: config.min_words,
            label_chars: config.section_label_chars,
            insight_chars: config.insight_excerpt_chars,
        }
    }

    /// Labeled section pieces in text order
    ///
    /// Only the first `max_sections` split pieces are examined; pieces with
    /// `min_words` words or fewer are dropped. The label is the piece's first
    /// line truncated to `label_chars` characters, or `Section N` (1-based
    /// piece position) when that line is empty. Labels may repeat.
    pub fn section_pieces<'a>(&self, text: &'a str) -> Vec<(String, &'a str)> {
        split_sections(text, self.max_sections)
            .into_iter()
            .enumerate()
            .filter(|(_, piece)| word_count(piece) > self.min_words)
            .map(|(idx, piece)| {
                let first_line = piece.split('\n').next().unwrap_or_default();
                let label = if first_line.is_empty() {
                    format!("Section {}", idx + 1)
                } else {
                    truncate_chars(first_line, self.label_chars).to_string()
                };
                (label, piece)
            })
            .collect()
    }

    /// Detect up to `max_sections` sections, keyed by label
    ///
    /// A repeated label replaces the earlier section's text.
    pub fn detect_sections(&self, text: &str) -> SectionMap {
        self.section_pieces(text).into_iter().collect()
    }

    /// Extract Methodology, Results and Conclusions spans
    ///
    /// Each span starts at the first keyword occurrence for its kind. The
    /// methodology and results spans end right before the next terminator
    /// and are empty when no terminator follows; the conclusions span runs
    /// to the end of the text. Spans are capped at `insight_chars`.
    pub fn detect_insights(&self, text: &str) -> InsightMap {
        let mut insights = InsightMap::new();

        let spans = [
            (
                InsightKind::Methodology,
                terminated_span(text, &METHODOLOGY_KEYWORD, &METHODOLOGY_END),
            ),
            (
                InsightKind::Results,
                terminated_span(text, &RESULTS_KEYWORD, &RESULTS_END),
            ),
            (InsightKind::Conclusions, trailing_span(text, &CONCLUSIONS_KEYWORD)),
        ];

        for (kind, span) in spans {
            if let Some(span) = span {
                insights.set(kind, truncate_chars(span, self.insight_chars));
            }
        }

        insights
    }
}

impl Default for StructureDetector {
    fn default() -> Self {
        Self::from_config(&AnalyzerConfig::default())
    }
}

/// Detect sections with default limits
pub fn detect_sections(text: &str) -> SectionMap {
    StructureDetector::default().detect_sections(text)
}

/// Detect insights with default limits
pub fn detect_insights(text: &str) -> InsightMap {
    StructureDetector::default().detect_insights(text)
}

/// Split at newlines followed by a section header, keeping at most `limit`
/// pieces. The newline itself belongs to neither piece.
fn split_sections(text: &str, limit: usize) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;

    for (idx, _) in text.match_indices('\n') {
        if pieces.len() == limit {
            break;
        }
        if SECTION_HEADER.is_match(&text[idx + 1..]) {
            pieces.push(&text[start..idx]);
            start = idx + 1;
        }
    }

    if pieces.len() < limit {
        pieces.push(&text[start..]);
    }

    pieces
}

/// Shortest span from the first keyword up to (not including) a terminator
fn terminated_span<'a>(text: &'a str, keyword: &Regex, terminator: &Regex) -> Option<&'a str> {
    let start = keyword.find(text)?;
    let end = terminator.find_at(text, start.end())?;
    Some(&text[start.start()..end.start()])
}

/// Span from the first keyword to the end of text, minus one trailing newline
fn trailing_span<'a>(text: &'a str, keyword: &Regex) -> Option<&'a str> {
    let start = keyword.find(text)?;
    let end = text.strip_suffix('\n').map_or(text.len(), str::len);
    Some(&text[start.start()..end.max(start.end())])
}
