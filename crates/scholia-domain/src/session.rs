//! Session module - explicit owner of documents and summary records
//!
//! A session lives for one run of the application. It is passed by
//! reference to the analyzer (which replaces records) and to the comparator
//! (which reads them); nothing else holds onto it.

use crate::document::Document;
use crate::summary::SummaryRecord;

/// Documents and their summary records, keyed by document name
///
/// Both collections keep insertion order. Replacing an entry keeps the
/// position of the original, so comparison order is upload order.
#[derive(Debug, Clone, Default)]
pub struct Session {
    documents: Vec<Document>,
    records: Vec<(String, SummaryRecord)>,
}

impl Session {
    /// Create an empty session
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document, replacing any document with the same name
    ///
    /// Returns the replaced document, if any.
    pub fn add_document(&mut self, document: Document) -> Option<Document> {
        match self
            .documents
            .iter_mut()
            .find(|existing| existing.name() == document.name())
        {
            Some(slot) => Some(std::mem::replace(slot, document)),
            None => {
                self.documents.push(document);
                None
            }
        }
    }

    /// Look up a document by name
    pub fn document(&self, name: &str) -> Option<&Document> {
        self.documents.iter().find(|d| d.name() == name)
    }

    /// All documents in insertion order
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Store the record for a document, replacing any prior record
    ///
    /// Returns the replaced record, if any.
    pub fn replace_record(
        &mut self,
        name: impl Into<String>,
        record: SummaryRecord,
    ) -> Option<SummaryRecord> {
        let name = name.into();
        match self.records.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, record)),
            None => {
                self.records.push((name, record));
                None
            }
        }
    }

    /// Look up the record for a document
    pub fn record(&self, name: &str) -> Option<&SummaryRecord> {
        self.records
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, record)| record)
    }

    /// All records in insertion order
    pub fn records(&self) -> impl Iterator<Item = (&str, &SummaryRecord)> {
        self.records.iter().map(|(name, record)| (name.as_str(), record))
    }

    /// Number of records
    pub fn record_count(&self) -> usize {
        self.records.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::DocumentFormat;

    fn record(executive: &str) -> SummaryRecord {
        SummaryRecord {
            executive: executive.to_string(),
            ..SummaryRecord::default()
        }
    }

    #[test]
    fn test_add_and_read_documents() {
        let mut session = Session::new();
        session.add_document(Document::extracted("a.txt", DocumentFormat::Txt, vec![], "A"));
        session.add_document(Document::extracted("b.txt", DocumentFormat::Txt, vec![], "B"));

        assert_eq!(session.documents().len(), 2);
        assert_eq!(session.document("b.txt").and_then(|d| d.text()), Some("B"));
        assert!(session.document("c.txt").is_none());
    }

    #[test]
    fn test_add_document_replaces_same_name() {
        let mut session = Session::new();
        session.add_document(Document::extracted("a.txt", DocumentFormat::Txt, vec![], "old"));
        let replaced =
            session.add_document(Document::extracted("a.txt", DocumentFormat::Txt, vec![], "new"));

        assert_eq!(replaced.and_then(|d| d.text().map(str::to_string)), Some("old".to_string()));
        assert_eq!(session.documents().len(), 1);
        assert_eq!(session.document("a.txt").and_then(|d| d.text()), Some("new"));
    }

    #[test]
    fn test_replace_record_overwrites_in_place() {
        let mut session = Session::new();
        assert!(session.replace_record("first", record("one")).is_none());
        session.replace_record("second", record("two"));
        let previous = session.replace_record("first", record("three"));

        assert_eq!(previous.map(|r| r.executive), Some("one".to_string()));
        assert_eq!(session.record_count(), 2);

        let names: Vec<_> = session.records().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["first", "second"]);
        assert_eq!(session.record("first").map(|r| r.executive.as_str()), Some("three"));
    }
}
