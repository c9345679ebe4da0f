//! Command implementations.

pub mod batch;
pub mod extract;
pub mod files;

pub use self::batch::execute_batch;
pub use self::extract::execute_extract;
pub use self::files::execute_files;

use crate::error::{CliError, Result};
use docsift_extractor::{ExtractorConfig, FeatureExtractor, FeatureRecord};
use docsift_nlp::RuleBasedAnalyzer;
use docsift_pdf::LopdfBackend;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Extractor wired to the shipped analyzer and PDF backend.
pub type PdfExtractor = FeatureExtractor<RuleBasedAnalyzer, LopdfBackend>;

/// Build the extractor once; commands share it across documents.
///
/// The analyzer accepts exactly the configured text length, so oversized
/// documents fail as `text_too_long` rather than inside analysis.
pub fn build_extractor(config: ExtractorConfig) -> Result<Arc<PdfExtractor>> {
    let analyzer = RuleBasedAnalyzer::new()?.with_max_length(config.max_text_length);
    Ok(Arc::new(FeatureExtractor::new(analyzer, LopdfBackend::new(), config)?))
}

/// Run one document on the blocking pool, optionally bounded by `timeout`.
///
/// A timed-out document is reported as failed; its worker is not interrupted
/// and finishes in the background.
pub async fn run_document(
    extractor: Arc<PdfExtractor>,
    path: PathBuf,
    timeout: Option<Duration>,
) -> Result<Vec<FeatureRecord>> {
    let worker_path = path.clone();
    let task =
        tokio::task::spawn_blocking(move || extractor.extract_features_from_pdf(&worker_path));

    let joined = match timeout {
        Some(limit) => tokio::time::timeout(limit, task)
            .await
            .map_err(|_| CliError::Timeout {
                path,
                secs: limit.as_secs(),
            })?,
        None => task.await,
    };

    Ok(joined??)
}

#[cfg(test)]
mod tests {
    use super::*;
    use docsift_pdf::MemoryDocument;

    #[test]
    fn test_analyzer_follows_configured_length() {
        let config = ExtractorConfig {
            max_text_length: 2_000_000,
            ..ExtractorConfig::default()
        };
        let extractor = build_extractor(config).unwrap();
        assert_eq!(extractor.analyzer().max_length(), 2_000_000);

        let text = "word ".repeat(240_000);
        let document = MemoryDocument::new([text]);
        let records = extractor.extract_features_from_document(&document).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_oversized_document_is_text_too_long() {
        let config = ExtractorConfig {
            max_text_length: 100,
            ..ExtractorConfig::default()
        };
        let extractor = build_extractor(config).unwrap();

        let document = MemoryDocument::new(["word ".repeat(40)]);
        let error = extractor
            .extract_features_from_document(&document)
            .unwrap_err();
        assert_eq!(CliError::from(error).kind(), "text_too_long");
    }
}
