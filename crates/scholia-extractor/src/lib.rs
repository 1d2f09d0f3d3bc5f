//! Scholia Extractor
//!
//! Converts uploaded documents into plain text.
//!
//! # Supported formats
//!
//! | Format | Strategy |
//! |--------|----------|
//! | pdf    | Page text concatenated in page order |
//! | docx   | Body paragraphs, one per line |
//! | pptx   | Text-bearing shapes, slide by slide, one line per shape |
//! | txt/md | Strict UTF-8 decode |
//!
//! Parser failures never escape as panics or foreign error types: every
//! failure is an [`ExtractorError`], and [`load_document`] folds it into the
//! returned [`Document`](scholia_domain::Document) so a batch of uploads
//! can proceed past a bad file.
//!
//! # Example Usage
//!
//! ```
//! use scholia_extractor::{extract, load_document};
//! use scholia_domain::DocumentFormat;
//!
//! let text = extract(b"plain words", DocumentFormat::Txt).unwrap();
//! assert_eq!(text, "plain words");
//!
//! let doc = load_document("notes.xyz", b"?".to_vec());
//! assert!(!doc.is_extracted());
//! ```

#![warn(missing_docs)]

mod error;
mod extractor;
mod ooxml;
mod pdf;

pub use error::ExtractorError;
pub use extractor::{extract, extract_file_name, load_document};
