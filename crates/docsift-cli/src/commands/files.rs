//! Files command implementation.

use crate::cli::FilesArgs;
use crate::error::Result;
use crate::output::Formatter;
use docsift_extractor::get_pdf_files;

/// Execute the files command.
pub fn execute_files(args: FilesArgs, formatter: &Formatter) -> Result<()> {
    let files = get_pdf_files(&args.dir)?;
    println!("{}", formatter.format_files(&files)?);
    Ok(())
}
