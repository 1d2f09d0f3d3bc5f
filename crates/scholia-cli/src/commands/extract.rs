//! Extract command implementation.

use crate::cli::FileArgs;
use crate::commands::analyze::read_document;
use crate::error::{CliError, Result};
use crate::output::Formatter;

/// Execute the extract command.
pub fn execute_extract(args: FileArgs, formatter: &Formatter) -> Result<()> {
    let document = read_document(&args.file)?;

    if let Some(error) = document.extraction_error() {
        return Err(CliError::InvalidInput(error.to_string()));
    }

    println!("{}", formatter.format_extracted(&document)?);
    Ok(())
}
