//! Configuration for the Analyzer

use scholia_domain::SummaryLength;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Serializable form of a [`SummaryLength`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthSetting {
    /// Minimum summary length (tokens)
    pub min: u32,

    /// Maximum summary length (tokens)
    pub max: u32,
}

impl From<SummaryLength> for LengthSetting {
    fn from(length: SummaryLength) -> Self {
        Self {
            min: length.min,
            max: length.max,
        }
    }
}

impl From<LengthSetting> for SummaryLength {
    fn from(setting: LengthSetting) -> Self {
        SummaryLength::new(setting.min, setting.max)
    }
}

/// Configuration for the Analyzer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Maximum chunk size (characters)
    pub max_chunk_size: usize,

    /// Requested overlap between chunks (characters). Carried for
    /// configuration compatibility; chunks never share text.
    pub chunk_overlap: usize,

    /// How many leading chunks feed the executive summary
    pub executive_chunk_limit: usize,

    /// A chunk or section needs strictly more words than this to be summarized
    pub min_words: usize,

    /// Maximum number of split pieces considered as sections
    pub max_sections: usize,

    /// Characters of a section passed to the summarizer
    pub section_excerpt_chars: usize,

    /// Maximum characters of a section label
    pub section_label_chars: usize,

    /// Maximum characters of an insight span
    pub insight_excerpt_chars: usize,

    /// Target length for executive-summary chunks
    pub executive_length: LengthSetting,

    /// Target length for sections
    pub section_length: LengthSetting,

    /// Target length for insights
    pub insight_length: LengthSetting,

    /// Maximum time for a single summarization call (seconds)
    pub summarize_timeout_secs: u64,
}

impl AnalyzerConfig {
    /// Get the summarization timeout as a Duration
    pub fn summarize_timeout(&self) -> Duration {
        Duration::from_secs(self.summarize_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_chunk_size == 0 {
            return Err("max_chunk_size must be greater than 0".to_string());
        }
        if self.chunk_overlap >= self.max_chunk_size {
            return Err("chunk_overlap must be smaller than max_chunk_size".to_string());
        }
        if self.executive_chunk_limit == 0 {
            return Err("executive_chunk_limit must be greater than 0".to_string());
        }
        if self.max_sections == 0 {
            return Err("max_sections must be greater than 0".to_string());
        }
        if self.section_excerpt_chars == 0 || self.insight_excerpt_chars == 0 {
            return Err("excerpt sizes must be greater than 0".to_string());
        }
        for (name, length) in [
            ("executive_length", self.executive_length),
            ("section_length", self.section_length),
            ("insight_length", self.insight_length),
        ] {
            if !SummaryLength::from(length).is_valid() {
                return Err(format!("{} must satisfy 0 < min <= max", name));
            }
        }
        if self.summarize_timeout_secs == 0 {
            return Err("summarize_timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_chunk_size: 1000,
            chunk_overlap: 100,
            executive_chunk_limit: 3,
            min_words: 50,
            max_sections: 5,
            section_excerpt_chars: 1000,
            section_label_chars: 50,
            insight_excerpt_chars: 500,
            executive_length: SummaryLength::EXECUTIVE.into(),
            section_length: SummaryLength::SECTION.into(),
            insight_length: SummaryLength::INSIGHT.into(),
            summarize_timeout_secs: 120,
        }
    }
}
