//! Compare command implementation.

use crate::cli::AnalyzeArgs;
use crate::commands::analyze::{analyzer_or_warn, load_session, run_analysis};
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use scholia_comparator::{compare_session, comparison_rows};

/// Execute the compare command.
pub async fn execute_compare(
    args: AnalyzeArgs,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let Some(analyzer) = analyzer_or_warn(&args.summarizer, config, formatter)? else {
        return Ok(());
    };

    let mut session = load_session(&args.files)?;
    let outcomes = run_analysis(&analyzer, &mut session, formatter).await;

    for outcome in &outcomes {
        if let Err(e) = &outcome.result {
            eprintln!("{}", formatter.error(&e.to_string()));
        }
    }

    match compare_session(&session) {
        Ok(result) => {
            let rows = comparison_rows(&session);
            println!("{}", formatter.format_comparison(&result, &rows)?);
        }
        Err(e) => println!("{}", formatter.info(&e.to_string())),
    }

    Ok(())
}
