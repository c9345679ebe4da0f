//! Batch command implementation.

use super::{run_document, PdfExtractor};
use crate::cli::BatchArgs;
use crate::error::Result;
use crate::output::Formatter;
use docsift_extractor::{
    get_pdf_files, DocumentFeatures, FolderFeatures, FolderPolicy, LoadFailure,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Execute the batch command.
///
/// Files run one after another in name order. `--skip-failures` forces the
/// skip-and-report policy regardless of the configured one. Documents and
/// failures are keyed by file name within the folder, like
/// `FeatureExtractor::extract_features_from_folder`.
pub async fn execute_batch(
    args: BatchArgs,
    extractor: Arc<PdfExtractor>,
    timeout: Option<Duration>,
    formatter: &Formatter,
) -> Result<()> {
    let skip = args.skip_failures
        || extractor.config().folder_policy == FolderPolicy::SkipAndReport;
    let folder = collect(&args, extractor, timeout, skip).await?;

    println!("{}", formatter.format_folder(&folder)?);
    eprintln!("{}", summary(formatter, &args, &folder));
    Ok(())
}

fn summary(formatter: &Formatter, args: &BatchArgs, folder: &FolderFeatures) -> String {
    let message = format!(
        "{} document(s) processed, {} failed in {}",
        folder.documents.len(),
        folder.failures.len(),
        args.dir.display()
    );
    if folder.failures.is_empty() {
        formatter.success(&message)
    } else {
        formatter.error(&message)
    }
}

async fn collect(
    args: &BatchArgs,
    extractor: Arc<PdfExtractor>,
    timeout: Option<Duration>,
    skip: bool,
) -> Result<FolderFeatures> {
    let names = get_pdf_files(&args.dir)?;
    info!("Batch over {} PDF files in {}", names.len(), args.dir.display());

    let mut folder = FolderFeatures::default();
    for name in names {
        let path = args.dir.join(&name);

        match run_document(Arc::clone(&extractor), path.clone(), timeout).await {
            Ok(records) => folder.documents.push(DocumentFeatures {
                source: name,
                records,
            }),
            Err(e) if skip => {
                warn!("Skipping {}: {}", path.display(), e);
                folder.failures.push(LoadFailure {
                    file_name: name,
                    kind: e.kind().to_string(),
                    reason: e.to_string(),
                });
            }
            Err(e) => return Err(e),
        }
    }

    Ok(folder)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::build_extractor;
    use crate::error::CliError;
    use docsift_extractor::ExtractorConfig;
    use docsift_pdf::write_text_pdf;
    use std::fs;

    fn fixture_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        write_text_pdf(dir.path().join("a.pdf"), &["Mail bob@corp.io today."]).unwrap();
        fs::write(dir.path().join("b.pdf"), b"not a pdf at all").unwrap();
        write_text_pdf(dir.path().join("c.pdf"), &["One. Two."]).unwrap();
        dir
    }

    #[tokio::test]
    async fn test_skip_failures_keeps_other_records() {
        let dir = fixture_dir();
        let args = BatchArgs {
            dir: dir.path().to_path_buf(),
            skip_failures: true,
        };
        let extractor = build_extractor(ExtractorConfig::default()).unwrap();

        let folder = collect(&args, extractor, None, true).await.unwrap();

        assert_eq!(folder.documents.len(), 2);
        assert_eq!(folder.documents[0].source, "a.pdf");
        assert_eq!(folder.documents[0].records[0].email_addresses, vec!["bob@corp.io"]);
        assert_eq!(folder.documents[1].records.len(), 2);
        assert_eq!(folder.failures.len(), 1);
        assert_eq!(folder.failures[0].file_name, "b.pdf");
        assert_eq!(folder.failures[0].kind, "extraction");
    }

    #[tokio::test]
    async fn test_names_match_library_folder_run() {
        let dir = fixture_dir();
        let args = BatchArgs {
            dir: dir.path().to_path_buf(),
            skip_failures: true,
        };
        let extractor = build_extractor(ExtractorConfig::lenient()).unwrap();

        let from_cli = collect(&args, Arc::clone(&extractor), None, true)
            .await
            .unwrap();
        let from_library = extractor.extract_features_from_folder(dir.path()).unwrap();

        let cli_sources: Vec<_> = from_cli.documents.iter().map(|d| &d.source).collect();
        let library_sources: Vec<_> = from_library.documents.iter().map(|d| &d.source).collect();
        assert_eq!(cli_sources, library_sources);
        assert_eq!(from_cli.failures[0].file_name, from_library.failures[0].file_name);
    }

    #[test]
    fn test_summary_names_folder() {
        let args = BatchArgs {
            dir: "docs".into(),
            skip_failures: false,
        };
        let formatter = Formatter::new(crate::config::OutputFormat::Table, false);

        let line = summary(&formatter, &args, &FolderFeatures::default());
        assert_eq!(line, "✓ 0 document(s) processed, 0 failed in docs");
    }

    #[tokio::test]
    async fn test_abort_on_first_failure() {
        let dir = fixture_dir();
        let args = BatchArgs {
            dir: dir.path().to_path_buf(),
            skip_failures: false,
        };
        let extractor = build_extractor(ExtractorConfig::default()).unwrap();

        let result = collect(&args, extractor, None, false).await;
        assert!(matches!(result, Err(CliError::Extractor(_))));
    }

    #[tokio::test]
    async fn test_generous_timeout_does_not_fire() {
        let dir = fixture_dir();
        let args = BatchArgs {
            dir: dir.path().to_path_buf(),
            skip_failures: true,
        };
        let extractor = build_extractor(ExtractorConfig::default()).unwrap();

        let folder = collect(&args, extractor, Some(Duration::from_secs(60)), true)
            .await
            .unwrap();
        assert_eq!(folder.documents.len(), 2);
    }
}
