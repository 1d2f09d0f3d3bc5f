//! Scholia Domain Layer
//!
//! This crate contains the data model shared by every other Scholia crate.
//! It has ZERO external dependencies and defines the value objects, the
//! per-run session and the trait interface for the summarization capability.
//!
//! ## Key Concepts
//!
//! - **Document**: An uploaded file plus the text extracted from it (or the
//!   reason extraction failed)
//! - **SummaryRecord**: Executive summary, section summaries and key insights
//!   for one document
//! - **InsightMap**: Always exactly Methodology, Results and Conclusions
//! - **ComparisonResult**: Lexical agreements and gaps across documents
//! - **Session**: Explicit owner of documents and records for one run
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Infrastructure (HTTP summarizers, file parsers) lives in other crates
//! - Trait definitions for all external interactions

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod comparison;
pub mod document;
pub mod session;
pub mod summary;
pub mod text;
pub mod traits;

// Re-exports for convenience
pub use comparison::{ComparisonResult, ComparisonRow};
pub use document::{Document, DocumentFormat};
pub use session::Session;
pub use summary::{InsightKind, InsightMap, SectionMap, SummaryLength, SummaryRecord};
