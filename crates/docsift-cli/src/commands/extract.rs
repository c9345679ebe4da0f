//! Extract command implementation.

use super::{run_document, PdfExtractor};
use crate::cli::ExtractArgs;
use crate::error::Result;
use crate::output::Formatter;
use std::sync::Arc;
use std::time::Duration;

/// Execute the extract command.
pub async fn execute_extract(
    args: ExtractArgs,
    extractor: Arc<PdfExtractor>,
    timeout: Option<Duration>,
    formatter: &Formatter,
) -> Result<()> {
    let records = run_document(extractor, args.file, timeout).await?;
    println!("{}", formatter.format_records(&records)?);
    Ok(())
}
