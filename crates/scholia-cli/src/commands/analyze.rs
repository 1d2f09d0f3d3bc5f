//! Analyze command implementation.

use crate::cli::{AnalyzeArgs, SummarizerArgs};
use crate::config::{Config, OutputFormat};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use scholia_analyzer::{AnalysisOutcome, Analyzer};
use scholia_comparator::{compare_session, comparison_rows};
use scholia_domain::{Document, Session};
use scholia_extractor::load_document;
use scholia_llm::HuggingFaceSummarizer;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Execute the analyze command.
pub async fn execute_analyze(
    args: AnalyzeArgs,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let Some(analyzer) = analyzer_or_warn(&args.summarizer, config, formatter)? else {
        return Ok(());
    };

    let mut session = load_session(&args.files)?;
    let outcomes = run_analysis(&analyzer, &mut session, formatter).await;

    let comparison = compare_session(&session).ok();
    let rows = comparison_rows(&session);
    let output = formatter.format_analysis(
        &session,
        &outcomes,
        comparison.as_ref().map(|result| (result, rows.as_slice())),
    )?;
    println!("{}", output);

    Ok(())
}

/// Build the analyzer, or print a warning and return `None` when no API key
/// was supplied.
pub(crate) fn analyzer_or_warn(
    args: &SummarizerArgs,
    config: &Config,
    formatter: &Formatter,
) -> Result<Option<Analyzer<HuggingFaceSummarizer>>> {
    match build_analyzer(args, config) {
        Ok(analyzer) => Ok(Some(analyzer)),
        Err(CliError::MissingApiKey) => {
            println!("{}", formatter.warning(&CliError::MissingApiKey.to_string()));
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Build a Hugging Face backed analyzer; flags override the config file.
pub(crate) fn build_analyzer(
    args: &SummarizerArgs,
    config: &Config,
) -> Result<Analyzer<HuggingFaceSummarizer>> {
    let api_key = args.api_key().ok_or(CliError::MissingApiKey)?;
    let endpoint = args
        .endpoint
        .clone()
        .unwrap_or_else(|| config.summarizer.endpoint.clone());
    let model = args
        .model
        .clone()
        .unwrap_or_else(|| config.summarizer.model.clone());

    let summarizer =
        HuggingFaceSummarizer::new(endpoint, model, api_key, config.summarizer.timeout())?;

    Analyzer::new(summarizer, config.analyzer.clone()).map_err(|e| CliError::Config(e.to_string()))
}

/// Read and extract every file into a new session.
pub(crate) fn load_session(files: &[PathBuf]) -> Result<Session> {
    let mut session = Session::new();
    for path in files {
        if session.add_document(read_document(path)?).is_some() {
            info!("Replaced earlier upload with the same name: {}", path.display());
        }
    }
    Ok(session)
}

/// Read one file and extract its text. Extraction failures are kept on the
/// returned document; only an unreadable file is an error.
pub(crate) fn read_document(path: &Path) -> Result<Document> {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| CliError::InvalidInput(format!("Not a file: {}", path.display())))?;

    let bytes = fs::read(path)
        .map_err(|e| CliError::InvalidInput(format!("Cannot read {}: {}", path.display(), e)))?;

    Ok(load_document(name, bytes))
}

/// Analyze a session, reporting progress on stderr in table mode.
pub(crate) async fn run_analysis(
    analyzer: &Analyzer<HuggingFaceSummarizer>,
    session: &mut Session,
    formatter: &Formatter,
) -> Vec<AnalysisOutcome> {
    let interactive = formatter.format() == OutputFormat::Table;
    if interactive {
        eprintln!(
            "{}",
            formatter.info(&format!(
                "Analyzing {} document(s) with {}...",
                session.documents().len(),
                analyzer.model_name()
            ))
        );
    }

    let outcomes = analyzer.analyze_session(session).await;

    if interactive {
        eprintln!("{}", formatter.success("Analysis complete!"));
    }
    outcomes
}
