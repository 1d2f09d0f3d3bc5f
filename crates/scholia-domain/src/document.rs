//! Document module - uploaded files and their extracted text

use std::fmt;

/// Declared format of an uploaded document, resolved from its file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentFormat {
    /// Portable Document Format
    Pdf,

    /// Office Open XML word processing document
    Docx,

    /// Office Open XML presentation
    Pptx,

    /// Plain UTF-8 text
    Txt,

    /// Markdown, treated as plain UTF-8 text
    Markdown,
}

impl DocumentFormat {
    /// All supported formats, in the order they are advertised to users
    pub const ALL: [DocumentFormat; 5] = [
        DocumentFormat::Pdf,
        DocumentFormat::Docx,
        DocumentFormat::Pptx,
        DocumentFormat::Txt,
        DocumentFormat::Markdown,
    ];

    /// Get the canonical extension (without the dot)
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentFormat::Pdf => "pdf",
            DocumentFormat::Docx => "docx",
            DocumentFormat::Pptx => "pptx",
            DocumentFormat::Txt => "txt",
            DocumentFormat::Markdown => "md",
        }
    }

    /// Parse a format from a bare extension, case-insensitively
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "pdf" => Some(DocumentFormat::Pdf),
            "docx" => Some(DocumentFormat::Docx),
            "pptx" => Some(DocumentFormat::Pptx),
            "txt" => Some(DocumentFormat::Txt),
            "md" => Some(DocumentFormat::Markdown),
            _ => None,
        }
    }

    /// Resolve the format declared by a file name's extension
    ///
    /// # Examples
    ///
    /// ```
    /// use scholia_domain::DocumentFormat;
    ///
    /// assert_eq!(DocumentFormat::from_file_name("paper.PDF"), Some(DocumentFormat::Pdf));
    /// assert_eq!(DocumentFormat::from_file_name("notes"), None);
    /// ```
    pub fn from_file_name(name: &str) -> Option<Self> {
        let (_, ext) = name.rsplit_once('.')?;
        Self::from_extension(ext)
    }

    /// Whether the format is decoded as plain text without a parser
    pub fn is_plain_text(&self) -> bool {
        matches!(self, DocumentFormat::Txt | DocumentFormat::Markdown)
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DocumentFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_extension(s.trim_start_matches('.'))
            .ok_or_else(|| format!("Unsupported format: {}", s))
    }
}

/// An uploaded document
///
/// A document is built once by the extractor and never mutated afterwards:
/// it carries either the extracted text or the reason extraction failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    name: String,
    format: Option<DocumentFormat>,
    bytes: Vec<u8>,
    text: Option<String>,
    extraction_error: Option<String>,
}

impl Document {
    /// Create a document whose text was extracted successfully
    pub fn extracted(
        name: impl Into<String>,
        format: DocumentFormat,
        bytes: Vec<u8>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            format: Some(format),
            bytes,
            text: Some(text.into()),
            extraction_error: None,
        }
    }

    /// Create a document whose extraction failed
    ///
    /// `format` is `None` when the declared extension is not supported.
    pub fn failed(
        name: impl Into<String>,
        format: Option<DocumentFormat>,
        bytes: Vec<u8>,
        error: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            format,
            bytes,
            text: None,
            extraction_error: Some(error.into()),
        }
    }

    /// Document name (the uploaded file name)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared format, if supported
    pub fn format(&self) -> Option<DocumentFormat> {
        self.format
    }

    /// Raw uploaded bytes
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Extracted plain text, absent on extraction failure
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Extraction failure message, absent on success
    pub fn extraction_error(&self) -> Option<&str> {
        self.extraction_error.as_deref()
    }

    /// Whether text extraction succeeded
    pub fn is_extracted(&self) -> bool {
        self.text.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_file_name() {
        assert_eq!(DocumentFormat::from_file_name("a.pdf"), Some(DocumentFormat::Pdf));
        assert_eq!(DocumentFormat::from_file_name("a.b.DOCX"), Some(DocumentFormat::Docx));
        assert_eq!(DocumentFormat::from_file_name("slides.pptx"), Some(DocumentFormat::Pptx));
        assert_eq!(DocumentFormat::from_file_name("readme.md"), Some(DocumentFormat::Markdown));
        assert_eq!(DocumentFormat::from_file_name("notes.txt"), Some(DocumentFormat::Txt));
        assert_eq!(DocumentFormat::from_file_name("archive.zip"), None);
        assert_eq!(DocumentFormat::from_file_name("Makefile"), None);
    }

    #[test]
    fn test_format_round_trip_through_str() {
        for format in DocumentFormat::ALL {
            let parsed: DocumentFormat = format.as_str().parse().unwrap();
            assert_eq!(parsed, format);
        }
        assert!(".doc".parse::<DocumentFormat>().is_err());
    }

    #[test]
    fn test_extracted_document() {
        let doc = Document::extracted("a.txt", DocumentFormat::Txt, b"hi".to_vec(), "hi");
        assert!(doc.is_extracted());
        assert_eq!(doc.text(), Some("hi"));
        assert_eq!(doc.extraction_error(), None);
        assert_eq!(doc.bytes(), b"hi");
    }

    #[test]
    fn test_failed_document() {
        let doc = Document::failed("a.zip", None, vec![1, 2], "Unsupported format: zip");
        assert!(!doc.is_extracted());
        assert_eq!(doc.text(), None);
        assert_eq!(doc.format(), None);
        assert_eq!(doc.extraction_error(), Some("Unsupported format: zip"));
    }
}
