//! Agreement and gap detection over executive summaries

use crate::error::ComparatorError;
use scholia_domain::text::truncate_chars;
use scholia_domain::{ComparisonResult, ComparisonRow, InsightKind, Session, SummaryRecord};
use std::collections::HashSet;
use tracing::debug;

/// A pair agrees when it shares strictly more words than this
const AGREEMENT_MIN_SHARED: usize = 10;

/// A document is a gap when it adds strictly more unseen words than this
const GAP_MIN_UNIQUE: usize = 5;

const ROW_EXECUTIVE_CHARS: usize = 200;
const ROW_INSIGHT_CHARS: usize = 100;

/// Compare executive summaries across documents
///
/// Returns `None` when fewer than two records are given. Agreements are
/// emitted per unordered pair in input order; gaps depend on input order
/// since each document is measured against the union of the ones before it.
pub fn compare<'a, I>(records: I) -> Option<ComparisonResult>
where
    I: IntoIterator<Item = (&'a str, &'a SummaryRecord)>,
{
    let vocabularies: Vec<(&str, HashSet<String>)> = records
        .into_iter()
        .map(|(name, record)| (name, vocabulary(&record.executive)))
        .collect();

    if vocabularies.len() < 2 {
        return None;
    }

    let mut result = ComparisonResult::default();

    for (i, (name_a, words_a)) in vocabularies.iter().enumerate() {
        for (name_b, words_b) in &vocabularies[i + 1..] {
            let shared = words_a.intersection(words_b).count();
            debug!("'{}' and '{}' share {} words", name_a, name_b, shared);
            if shared > AGREEMENT_MIN_SHARED {
                result
                    .agreements
                    .push(format!("{} and {} discuss similar concepts", name_a, name_b));
            }
        }
    }

    let mut seen: HashSet<&str> = HashSet::new();
    for (name, words) in &vocabularies {
        let unique = words.iter().filter(|w| !seen.contains(w.as_str())).count();
        if unique > GAP_MIN_UNIQUE {
            result
                .gaps
                .push(format!("{} introduces unique aspects not covered by others", name));
        }
        seen.extend(words.iter().map(String::as_str));
    }

    Some(result)
}

/// Compare every record of a session
pub fn compare_session(session: &Session) -> Result<ComparisonResult, ComparatorError> {
    compare(session.records()).ok_or(ComparatorError::InsufficientInput {
        found: session.record_count(),
    })
}

/// Side-by-side excerpt rows for every record of a session
pub fn comparison_rows(session: &Session) -> Vec<ComparisonRow> {
    session
        .records()
        .map(|(name, record)| ComparisonRow {
            name: name.to_string(),
            executive: format!(
                "{}...",
                truncate_chars(&record.executive, ROW_EXECUTIVE_CHARS)
            ),
            methodology: truncate_chars(
                record.insights.get(InsightKind::Methodology),
                ROW_INSIGHT_CHARS,
            )
            .to_string(),
            results: truncate_chars(record.insights.get(InsightKind::Results), ROW_INSIGHT_CHARS)
                .to_string(),
        })
        .collect()
}

fn vocabulary(text: &str) -> HashSet<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(executive: &str) -> SummaryRecord {
        SummaryRecord {
            executive: executive.to_string(),
            ..SummaryRecord::default()
        }
    }

    fn numbered(prefix: &str, range: std::ops::Range<usize>) -> String {
        range
            .map(|i| format!("{}{}", prefix, i))
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn test_fewer_than_two_records() {
        assert!(compare(std::iter::empty()).is_none());

        let only = record("one two three");
        assert!(compare([("a.txt", &only)]).is_none());
    }

    #[test]
    fn test_agreement_boundary_is_strict() {
        let base = record(&numbered("w", 0..11));
        let eleven = record(&numbered("w", 0..11));
        let ten = record(&format!("{} other", numbered("w", 0..10)));

        let result = compare([("a", &base), ("b", &eleven)]).unwrap();
        assert_eq!(result.agreements, vec!["a and b discuss similar concepts"]);

        let result = compare([("a", &base), ("c", &ten)]).unwrap();
        assert!(result.agreements.is_empty());
    }

    #[test]
    fn test_words_compare_case_insensitively() {
        let upper = record(&numbered("W", 0..12));
        let lower = record(&numbered("w", 0..12));

        let result = compare([("a", &upper), ("b", &lower)]).unwrap();
        assert_eq!(result.agreements.len(), 1);
    }

    #[test]
    fn test_agreements_cover_every_pair_in_order() {
        let shared = numbered("s", 0..20);
        let a = record(&shared);
        let b = record(&shared);
        let c = record(&shared);

        let result = compare([("a", &a), ("b", &b), ("c", &c)]).unwrap();
        assert_eq!(
            result.agreements,
            vec![
                "a and b discuss similar concepts",
                "a and c discuss similar concepts",
                "b and c discuss similar concepts",
            ]
        );
    }

    #[test]
    fn test_gaps_depend_on_order() {
        let small = record(&numbered("x", 0..3));
        let large = record(&numbered("x", 0..10));

        // Small first: large adds 7 unseen words
        let result = compare([("small", &small), ("large", &large)]).unwrap();
        assert_eq!(
            result.gaps,
            vec!["large introduces unique aspects not covered by others"]
        );

        // Large first: small adds nothing
        let result = compare([("large", &large), ("small", &small)]).unwrap();
        assert_eq!(
            result.gaps,
            vec!["large introduces unique aspects not covered by others"]
        );

        let tiny = record(&numbered("y", 0..5));
        let result = compare([("tiny", &tiny), ("small", &small)]).unwrap();
        assert!(result.gaps.is_empty());
    }

    #[test]
    fn test_identical_summaries() {
        let text = numbered("t", 0..30);
        let a = record(&text);
        let b = record(&text);

        let result = compare([("a.txt", &a), ("b.txt", &b)]).unwrap();
        assert_eq!(result.agreements, vec!["a.txt and b.txt discuss similar concepts"]);
        assert_eq!(
            result.gaps,
            vec!["a.txt introduces unique aspects not covered by others"]
        );
        assert!(result.contradictions.is_empty());
    }

    #[test]
    fn test_empty_summaries_compare_to_nothing() {
        let a = record("");
        let b = record("");
        let result = compare([("a", &a), ("b", &b)]).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_compare_session_requires_two_records() {
        let mut session = Session::new();
        session.replace_record("a.txt", record("words"));

        assert_eq!(
            compare_session(&session),
            Err(ComparatorError::InsufficientInput { found: 1 })
        );

        session.replace_record("b.txt", record("words"));
        assert!(compare_session(&session).is_ok());
    }

    #[test]
    fn test_comparison_rows_truncate() {
        let mut long = record(&"e".repeat(300));
        long.insights.set(InsightKind::Methodology, "m".repeat(150));
        long.insights.set(InsightKind::Results, "short result");

        let mut session = Session::new();
        session.replace_record("long.pdf", long);
        session.replace_record("empty.txt", SummaryRecord::default());

        let rows = comparison_rows(&session);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "long.pdf");
        assert_eq!(rows[0].executive, format!("{}...", "e".repeat(200)));
        assert_eq!(rows[0].methodology.chars().count(), 100);
        assert_eq!(rows[0].results, "short result");
        assert_eq!(rows[1].executive, "...");
        assert_eq!(rows[1].methodology, "");
    }
}
