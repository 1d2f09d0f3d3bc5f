//! CLI command definitions and argument parsing.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Scholia - Summarize and compare research papers.
#[derive(Debug, Parser)]
#[command(name = "scholia")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (summaries only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Summarize documents (and compare them when there are several)
    Analyze(AnalyzeArgs),

    /// Summarize documents and show only the comparison
    Compare(AnalyzeArgs),

    /// Print the text extracted from a document
    Extract(FileArgs),

    /// Show chunks, sections and insight spans without summarizing
    Inspect(FileArgs),
}

/// Summarization backend options.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct SummarizerArgs {
    /// Hugging Face API key
    #[arg(long, env = "HUGGINGFACE_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Model identifier (overrides config)
    #[arg(long)]
    pub model: Option<String>,

    /// Inference endpoint base URL (overrides config)
    #[arg(long)]
    pub endpoint: Option<String>,
}

impl SummarizerArgs {
    /// The API key, if a non-empty one was supplied.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

/// Arguments for the analyze and compare commands.
#[derive(Debug, Parser)]
pub struct AnalyzeArgs {
    /// Documents to process (pdf, docx, pptx, txt, md)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    #[command(flatten)]
    pub summarizer: SummarizerArgs,
}

/// Arguments for single-document commands.
#[derive(Debug, Parser)]
pub struct FileArgs {
    /// Document to read
    pub file: PathBuf,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
