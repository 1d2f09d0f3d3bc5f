//! Comparison module - cross-document comparison results

/// Outcome of comparing the executive summaries of two or more documents
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComparisonResult {
    /// Pairs of documents with a large shared vocabulary
    pub agreements: Vec<String>,

    /// Conflicting findings. No heuristic populates this yet, so it is
    /// always empty.
    pub contradictions: Vec<String>,

    /// Documents that bring vocabulary unseen in earlier documents
    pub gaps: Vec<String>,
}

impl ComparisonResult {
    /// Whether nothing was flagged in any category
    pub fn is_empty(&self) -> bool {
        self.agreements.is_empty() && self.contradictions.is_empty() && self.gaps.is_empty()
    }
}

/// One row of the detailed side-by-side comparison table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonRow {
    /// Document name
    pub name: String,

    /// Start of the executive summary, suffixed with `...`
    pub executive: String,

    /// Start of the methodology insight
    pub methodology: String,

    /// Start of the results insight
    pub results: String,
}
