//! Summary module - per-document summaries and their building blocks

use std::fmt;

/// Target length, in model tokens, of a single summarization call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SummaryLength {
    /// Minimum summary length
    pub min: u32,

    /// Maximum summary length
    pub max: u32,
}

impl SummaryLength {
    /// Length used for each executive-summary chunk
    pub const EXECUTIVE: SummaryLength = SummaryLength::new(30, 100);

    /// Length used for each detected section
    pub const SECTION: SummaryLength = SummaryLength::new(20, 80);

    /// Length used for each key insight
    pub const INSIGHT: SummaryLength = SummaryLength::new(20, 60);

    /// Create a new length target
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Whether the bounds are usable (`0 < min <= max`)
    pub fn is_valid(&self) -> bool {
        self.min > 0 && self.min <= self.max
    }
}

/// Ordered mapping from section label to section text
///
/// Iteration follows insertion order. Inserting a label that is already
/// present replaces its value but keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionMap {
    entries: Vec<(String, String)>,
}

impl SectionMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a section, returning the previous value if any
    pub fn insert(&mut self, label: impl Into<String>, text: impl Into<String>) -> Option<String> {
        let label = label.into();
        let text = text.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == label) {
            Some((_, value)) => Some(std::mem::replace(value, text)),
            None => {
                self.entries.push((label, text));
                None
            }
        }
    }

    /// Look up a section by label
    pub fn get(&self, label: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == label)
            .map(|(_, text)| text.as_str())
    }

    /// Iterate `(label, text)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(l, t)| (l.as_str(), t.as_str()))
    }

    /// Labels in insertion order
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(l, _)| l.as_str())
    }

    /// Number of sections
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no section is present
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<L: Into<String>, T: Into<String>> FromIterator<(L, T)> for SectionMap {
    fn from_iter<I: IntoIterator<Item = (L, T)>>(iter: I) -> Self {
        let mut map = SectionMap::new();
        for (label, text) in iter {
            map.insert(label, text);
        }
        map
    }
}

/// The three fixed insight categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InsightKind {
    /// How the work was done
    Methodology,

    /// What was found
    Results,

    /// What it means
    Conclusions,
}

impl InsightKind {
    /// All kinds in display order
    pub const ALL: [InsightKind; 3] = [
        InsightKind::Methodology,
        InsightKind::Results,
        InsightKind::Conclusions,
    ];

    /// Display label
    pub fn as_str(&self) -> &'static str {
        match self {
            InsightKind::Methodology => "Methodology",
            InsightKind::Results => "Results",
            InsightKind::Conclusions => "Conclusions",
        }
    }
}

impl fmt::Display for InsightKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Methodology, Results and Conclusions texts
///
/// Every key is always present; a missing insight is an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InsightMap {
    methodology: String,
    results: String,
    conclusions: String,
}

impl InsightMap {
    /// Create a map with all three insights empty
    pub fn new() -> Self {
        Self::default()
    }

    /// Text for a kind (empty when not found)
    pub fn get(&self, kind: InsightKind) -> &str {
        match kind {
            InsightKind::Methodology => &self.methodology,
            InsightKind::Results => &self.results,
            InsightKind::Conclusions => &self.conclusions,
        }
    }

    /// Set the text for a kind
    pub fn set(&mut self, kind: InsightKind, text: impl Into<String>) {
        let slot = match kind {
            InsightKind::Methodology => &mut self.methodology,
            InsightKind::Results => &mut self.results,
            InsightKind::Conclusions => &mut self.conclusions,
        };
        *slot = text.into();
    }

    /// Iterate all three `(kind, text)` pairs in display order
    pub fn iter(&self) -> impl Iterator<Item = (InsightKind, &str)> {
        InsightKind::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }

    /// Whether every insight is empty
    pub fn is_empty(&self) -> bool {
        self.iter().all(|(_, text)| text.is_empty())
    }
}

/// Everything produced for one analyzed document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummaryRecord {
    /// Executive summary (may be empty when no chunk qualified)
    pub executive: String,

    /// Section label to section summary
    pub sections: SectionMap,

    /// Key insights
    pub insights: InsightMap,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_length_presets() {
        assert_eq!(SummaryLength::EXECUTIVE, SummaryLength::new(30, 100));
        assert_eq!(SummaryLength::SECTION, SummaryLength::new(20, 80));
        assert_eq!(SummaryLength::INSIGHT, SummaryLength::new(20, 60));
        assert!(SummaryLength::EXECUTIVE.is_valid());
        assert!(!SummaryLength::new(50, 10).is_valid());
        assert!(!SummaryLength::new(0, 10).is_valid());
    }

    #[test]
    fn test_section_map_keeps_insertion_order() {
        let mut map = SectionMap::new();
        map.insert("Introduction", "a");
        map.insert("Methods", "b");
        map.insert("Results", "c");

        let labels: Vec<_> = map.labels().collect();
        assert_eq!(labels, vec!["Introduction", "Methods", "Results"]);
    }

    #[test]
    fn test_section_map_replace_keeps_position() {
        let mut map = SectionMap::new();
        map.insert("A", "1");
        map.insert("B", "2");
        let previous = map.insert("A", "3");

        assert_eq!(previous.as_deref(), Some("1"));
        assert_eq!(map.len(), 2);
        let entries: Vec<_> = map.iter().collect();
        assert_eq!(entries, vec![("A", "3"), ("B", "2")]);
    }

    #[test]
    fn test_insight_map_always_has_three_keys() {
        let map = InsightMap::new();
        let kinds: Vec<_> = map.iter().map(|(k, _)| k).collect();
        assert_eq!(kinds, InsightKind::ALL.to_vec());
        assert!(map.is_empty());
    }

    #[test]
    fn test_insight_map_set_and_get() {
        let mut map = InsightMap::new();
        map.set(InsightKind::Results, "accuracy improved");

        assert_eq!(map.get(InsightKind::Results), "accuracy improved");
        assert_eq!(map.get(InsightKind::Methodology), "");
        assert!(!map.is_empty());
    }
}
