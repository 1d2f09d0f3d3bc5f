//! Output formatting for the CLI.

use crate::commands::inspect::Inspection;
use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use scholia_analyzer::AnalysisOutcome;
use scholia_domain::{
    ComparisonResult, ComparisonRow, Document, InsightKind, InsightMap, Session, SummaryRecord,
};
use serde_json::{json, Value};
use tabled::{
    builder::Builder,
    settings::{object::Columns, object::Rows, Alignment, Modify, Style, Width},
};

/// Column width for long text cells in tables
const CELL_WIDTH: usize = 48;

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// The selected output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format the result of an analysis run.
    ///
    /// Outcomes are rendered in order; failed documents are reported inline.
    /// The comparison is included when one was computed.
    pub fn format_analysis(
        &self,
        session: &Session,
        outcomes: &[AnalysisOutcome],
        comparison: Option<(&ComparisonResult, &[ComparisonRow])>,
    ) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let documents: Vec<Value> = outcomes
                    .iter()
                    .map(|outcome| match (&outcome.result, session.record(&outcome.name)) {
                        (Ok(()), Some(record)) => record_json(&outcome.name, record),
                        (Err(e), _) => json!({
                            "name": outcome.name,
                            "status": "failed",
                            "error": e.to_string(),
                        }),
                        (Ok(()), None) => json!({ "name": outcome.name, "status": "missing" }),
                    })
                    .collect();

                let comparison = comparison.map(|(result, rows)| comparison_json(result, rows));
                Ok(serde_json::to_string_pretty(&json!({
                    "documents": documents,
                    "comparison": comparison,
                }))?)
            }
            OutputFormat::Table => {
                let mut blocks = Vec::new();
                for outcome in outcomes {
                    match (&outcome.result, session.record(&outcome.name)) {
                        (Ok(()), Some(record)) => {
                            blocks.push(self.record_table(&outcome.name, record))
                        }
                        (Err(e), _) => blocks.push(self.error(&e.to_string())),
                        (Ok(()), None) => {}
                    }
                }
                if let Some((result, rows)) = comparison {
                    blocks.push(self.comparison_table(result, rows));
                }
                Ok(blocks.join("\n\n"))
            }
            OutputFormat::Quiet => Ok(session
                .records()
                .map(|(name, record)| format!("{}\t{}", name, record.executive))
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format a comparison with its detailed rows.
    pub fn format_comparison(
        &self,
        result: &ComparisonResult,
        rows: &[ComparisonRow],
    ) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&comparison_json(result, rows))?),
            OutputFormat::Table => Ok(self.comparison_table(result, rows)),
            OutputFormat::Quiet => Ok(result
                .agreements
                .iter()
                .chain(&result.contradictions)
                .chain(&result.gaps)
                .cloned()
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format the extracted text of a document.
    pub fn format_extracted(&self, document: &Document) -> Result<String> {
        let text = document.text().unwrap_or_default();
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
                "name": document.name(),
                "format": document.format().map(|f| f.as_str()),
                "chars": text.chars().count(),
                "text": text,
            }))?),
            OutputFormat::Table | OutputFormat::Quiet => Ok(text.to_string()),
        }
    }

    /// Format structural statistics of a document.
    pub fn format_inspection(&self, inspection: &Inspection) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
                "name": inspection.name,
                "chars": inspection.chars,
                "words": inspection.words,
                "chunks": inspection
                    .chunks
                    .iter()
                    .map(|(chars, words)| json!({ "chars": chars, "words": words }))
                    .collect::<Vec<_>>(),
                "sections": inspection
                    .sections
                    .iter()
                    .map(|(label, words)| json!({ "label": label, "words": words }))
                    .collect::<Vec<_>>(),
                "insights": insights_json(&inspection.insights),
            }))?),
            OutputFormat::Quiet => Ok(format!(
                "{}\t{} chunks\t{} sections",
                inspection.name,
                inspection.chunks.len(),
                inspection.sections.len()
            )),
            OutputFormat::Table => {
                let mut out = vec![
                    self.heading(&inspection.name),
                    format!("{} characters, {} words", inspection.chars, inspection.words),
                ];

                let mut chunks = Builder::default();
                chunks.push_record(["Chunk", "Characters", "Words"]);
                for (idx, (chars, words)) in inspection.chunks.iter().enumerate() {
                    chunks.push_record([
                        (idx + 1).to_string(),
                        chars.to_string(),
                        words.to_string(),
                    ]);
                }
                out.push(self.subheading("Chunks"));
                out.push(styled(chunks));

                out.push(self.subheading("Detected Sections"));
                if inspection.sections.is_empty() {
                    out.push("No distinct sections detected".to_string());
                } else {
                    let mut sections = Builder::default();
                    sections.push_record(["Label", "Words"]);
                    for (label, words) in &inspection.sections {
                        sections.push_record([label.clone(), words.to_string()]);
                    }
                    out.push(styled(sections));
                }

                out.push(self.subheading("Insight Spans"));
                out.push(self.insights_block(&inspection.insights));
                Ok(out.join("\n"))
            }
        }
    }

    fn record_table(&self, name: &str, record: &SummaryRecord) -> String {
        let mut out = vec![self.heading(name), self.subheading("Executive Summary")];
        if record.executive.is_empty() {
            out.push("No executive summary generated".to_string());
        } else {
            out.push(record.executive.clone());
        }

        out.push(self.subheading("Section-wise Summary"));
        if record.sections.is_empty() {
            out.push("No distinct sections detected".to_string());
        } else {
            for (label, summary) in record.sections.iter() {
                out.push(self.colorize(label, "cyan"));
                out.push(format!("  {}", summary));
            }
        }

        out.push(self.subheading("Key Insights"));
        out.push(self.insights_block(&record.insights));
        out.join("\n")
    }

    fn insights_block(&self, insights: &InsightMap) -> String {
        insights
            .iter()
            .map(|(kind, text)| {
                let text = if text.is_empty() { "Not found" } else { text };
                format!("{}: {}", self.colorize(kind.as_str(), "cyan"), text)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn comparison_table(&self, result: &ComparisonResult, rows: &[ComparisonRow]) -> String {
        let mut out = vec![self.heading("Comparative Analysis")];

        out.push(self.subheading("Agreements"));
        if result.agreements.is_empty() {
            out.push(self.info("No clear agreements found"));
        }
        out.extend(result.agreements.iter().map(|a| self.success(a)));

        out.push(self.subheading("Contradictions"));
        if result.contradictions.is_empty() {
            out.push(self.info("No contradictions detected"));
        }
        out.extend(result.contradictions.iter().map(|c| self.warning(c)));

        out.push(self.subheading("Research Gaps"));
        if result.gaps.is_empty() {
            out.push(self.info("No unique gaps identified"));
        }
        out.extend(result.gaps.iter().map(|g| self.info(g)));

        out.push(self.subheading("Detailed Comparison"));
        let mut builder = Builder::default();
        builder.push_record(["Document", "Executive Summary", "Methodology", "Results"]);
        for row in rows {
            builder.push_record([
                row.name.as_str(),
                row.executive.as_str(),
                row.methodology.as_str(),
                row.results.as_str(),
            ]);
        }
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()))
            .with(Modify::new(Columns::new(1..)).with(Width::wrap(CELL_WIDTH)));
        out.push(table.to_string());

        out.join("\n")
    }

    fn heading(&self, text: &str) -> String {
        let line = format!("== {} ==", text);
        if self.color_enabled {
            line.bold().to_string()
        } else {
            line
        }
    }

    fn subheading(&self, text: &str) -> String {
        format!("\n{}", self.colorize(text, "magenta"))
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            "magenta" => text.magenta().to_string(),
            _ => text.to_string(),
        }
    }
}

fn styled(builder: Builder) -> String {
    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));
    table.to_string()
}

fn record_json(name: &str, record: &SummaryRecord) -> Value {
    let sections: Vec<Value> = record
        .sections
        .iter()
        .map(|(label, summary)| json!({ "label": label, "summary": summary }))
        .collect();

    json!({
        "name": name,
        "status": "ok",
        "executive": record.executive,
        "sections": sections,
        "insights": insights_json(&record.insights),
    })
}

fn insights_json(insights: &InsightMap) -> Value {
    json!({
        "methodology": insights.get(InsightKind::Methodology),
        "results": insights.get(InsightKind::Results),
        "conclusions": insights.get(InsightKind::Conclusions),
    })
}

fn comparison_json(result: &ComparisonResult, rows: &[ComparisonRow]) -> Value {
    let rows: Vec<Value> = rows
        .iter()
        .map(|row| {
            json!({
                "name": row.name,
                "executive": row.executive,
                "methodology": row.methodology,
                "results": row.results,
            })
        })
        .collect();

    json!({
        "agreements": result.agreements,
        "contradictions": result.contradictions,
        "gaps": result.gaps,
        "rows": rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use scholia_analyzer::AnalyzerError;
    use scholia_domain::SectionMap;

    fn sample_session() -> Session {
        let mut sections = SectionMap::new();
        sections.insert("1. Introduction", "Intro summary");

        let mut record = SummaryRecord {
            executive: "An executive summary".to_string(),
            sections,
            ..SummaryRecord::default()
        };
        record.insights.set(InsightKind::Methodology, "Surveys were used");

        let mut session = Session::new();
        session.replace_record("paper.pdf", record);
        session
    }

    fn outcomes() -> Vec<AnalysisOutcome> {
        vec![
            AnalysisOutcome {
                name: "paper.pdf".to_string(),
                result: Ok(()),
            },
            AnalysisOutcome {
                name: "scan.png".to_string(),
                result: Err(AnalyzerError::MissingText {
                    name: "scan.png".to_string(),
                    reason: "Unsupported file format: scan.png".to_string(),
                }),
            },
        ]
    }

    #[test]
    fn test_table_analysis() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter
            .format_analysis(&sample_session(), &outcomes(), None)
            .unwrap();

        assert!(output.contains("== paper.pdf =="));
        assert!(output.contains("An executive summary"));
        assert!(output.contains("1. Introduction"));
        assert!(output.contains("Methodology: Surveys were used"));
        assert!(output.contains("Results: Not found"));
        assert!(output.contains("✗ No text extracted from 'scan.png'"));
    }

    #[test]
    fn test_table_without_sections() {
        let mut session = Session::new();
        session.replace_record("empty.txt", SummaryRecord::default());
        let outcomes = vec![AnalysisOutcome {
            name: "empty.txt".to_string(),
            result: Ok(()),
        }];

        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_analysis(&session, &outcomes, None).unwrap();
        assert!(output.contains("No distinct sections detected"));
        assert!(output.contains("Conclusions: Not found"));
    }

    #[test]
    fn test_json_analysis() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter
            .format_analysis(&sample_session(), &outcomes(), None)
            .unwrap();

        let value: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["documents"][0]["status"], "ok");
        assert_eq!(value["documents"][0]["sections"][0]["label"], "1. Introduction");
        assert_eq!(value["documents"][0]["insights"]["results"], "");
        assert_eq!(value["documents"][1]["status"], "failed");
        assert!(value["comparison"].is_null());
    }

    #[test]
    fn test_quiet_analysis() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter
            .format_analysis(&sample_session(), &outcomes(), None)
            .unwrap();
        assert_eq!(output, "paper.pdf\tAn executive summary");
    }

    #[test]
    fn test_comparison_table() {
        let result = ComparisonResult {
            agreements: vec!["a.pdf and b.pdf discuss similar concepts".to_string()],
            ..ComparisonResult::default()
        };
        let rows = vec![ComparisonRow {
            name: "a.pdf".to_string(),
            executive: "Summary...".to_string(),
            methodology: "Method".to_string(),
            results: String::new(),
        }];

        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_comparison(&result, &rows).unwrap();
        assert!(output.contains("✓ a.pdf and b.pdf discuss similar concepts"));
        assert!(output.contains("No contradictions detected"));
        assert!(output.contains("No unique gaps identified"));
        assert!(output.contains("Executive Summary"));
        assert!(output.contains("Summary..."));
    }

    #[test]
    fn test_comparison_json() {
        let result = ComparisonResult {
            gaps: vec!["b.pdf introduces unique aspects not covered by others".to_string()],
            ..ComparisonResult::default()
        };
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_comparison(&result, &[]).unwrap();

        let value: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["gaps"].as_array().unwrap().len(), 1);
        assert!(value["contradictions"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("test"), "✓ test");
        assert_eq!(formatter.warning("careful"), "⚠ careful");
    }
}
