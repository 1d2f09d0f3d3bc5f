//! Scholia Comparator
//!
//! Lexical cross-document comparison of executive summaries.
//!
//! Two documents "agree" when their executive summaries share more than ten
//! distinct lowercase words. A document introduces a "gap" when its summary
//! has more than five words that no earlier document (in insertion order)
//! used. Contradictions are never detected.

#![warn(missing_docs)]

mod comparator;
mod error;

pub use comparator::{compare, compare_session, comparison_rows};
pub use error::ComparatorError;
