//! Core FeatureExtractor implementation

use crate::config::{ExtractorConfig, FolderPolicy};
use crate::emails::EmailMatcher;
use crate::error::ExtractorError;
use crate::loader::{load_file, load_folder};
use crate::text::get_document_text;
use crate::types::{DocumentFeatures, FeatureRecord, FolderFeatures, FolderLoad, LoadFailure};
use docsift_domain::traits::{PdfBackend, PdfDocument, TextAnalyzer};
use docsift_domain::{Analysis, EntitySpan, SentenceSpan};
use std::fmt::Display;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// The FeatureExtractor turns PDF documents into per-sentence feature records
///
/// Sentence segmentation runs once over the whole document text; dates and
/// emails are then re-extracted by a fresh analysis of each sentence alone, so
/// entity offsets in the records are sentence-relative.
pub struct FeatureExtractor<A, P>
where
    A: TextAnalyzer,
    P: PdfBackend,
{
    analyzer: Arc<A>,
    backend: P,
    config: ExtractorConfig,
    emails: EmailMatcher,
}

impl<A, P> FeatureExtractor<A, P>
where
    A: TextAnalyzer,
    P: PdfBackend,
    A::Error: Display,
    P::Error: Display,
    <P::Document as PdfDocument>::Error: Display,
{
    /// Create a new FeatureExtractor
    pub fn new(analyzer: A, backend: P, config: ExtractorConfig) -> Result<Self, ExtractorError> {
        Self::with_shared_analyzer(Arc::new(analyzer), backend, config)
    }

    /// Create a FeatureExtractor around an analyzer shared with other callers
    pub fn with_shared_analyzer(
        analyzer: Arc<A>,
        backend: P,
        config: ExtractorConfig,
    ) -> Result<Self, ExtractorError> {
        config.validate().map_err(ExtractorError::Config)?;
        let emails = EmailMatcher::new()
            .map_err(|e| ExtractorError::Config(format!("invalid email pattern: {}", e)))?;

        Ok(Self {
            analyzer,
            backend,
            config,
            emails,
        })
    }

    /// The shared analyzer
    pub fn analyzer(&self) -> &Arc<A> {
        &self.analyzer
    }

    /// The active configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    fn analyze(&self, text: &str) -> Result<Analysis, ExtractorError> {
        self.analyzer
            .analyze(text)
            .map_err(|e| ExtractorError::Analysis(e.to_string()))
    }

    /// Sentence spans of `text` in document order
    ///
    /// The iterator is single-pass; iterating again requires another call,
    /// which runs another analysis.
    pub fn get_sentences(
        &self,
        text: &str,
    ) -> Result<impl Iterator<Item = SentenceSpan>, ExtractorError> {
        Ok(self.analyze(text)?.sentences.into_iter())
    }

    /// All entities the analyzer recognizes in `text`
    pub fn extract_entities(&self, text: &str) -> Result<Vec<EntitySpan>, ExtractorError> {
        Ok(self.analyze(text)?.entities)
    }

    /// Entities in `text` labeled as dates
    pub fn extract_dates(&self, text: &str) -> Result<Vec<EntitySpan>, ExtractorError> {
        Ok(self
            .extract_entities(text)?
            .into_iter()
            .filter(EntitySpan::is_date)
            .collect())
    }

    /// Tokens of `text` that start with an email address
    pub fn extract_emails(&self, text: &str) -> Result<Vec<String>, ExtractorError> {
        let analysis = self.analyze(text)?;
        Ok(self.emails.collect(&analysis.tokens))
    }

    /// Feature record for one sentence, from an analysis of that sentence alone
    pub fn extract_features_from_sentence(
        &self,
        sentence: &str,
    ) -> Result<FeatureRecord, ExtractorError> {
        let analysis = self.analyze(sentence)?;
        let email_addresses = self.emails.collect(&analysis.tokens);
        let dates = analysis
            .entities
            .into_iter()
            .filter(EntitySpan::is_date)
            .collect();

        Ok(FeatureRecord {
            text: sentence.to_string(),
            dates,
            email_addresses,
        })
    }

    /// Feature records for an already-opened document
    pub fn extract_features_from_document<D>(
        &self,
        document: &D,
    ) -> Result<Vec<FeatureRecord>, ExtractorError>
    where
        D: PdfDocument,
        D::Error: Display,
    {
        let text = get_document_text(document)?;
        if text.len() > self.config.max_text_length {
            return Err(ExtractorError::TextTooLong(
                text.len(),
                self.config.max_text_length,
            ));
        }

        let records = self
            .get_sentences(&text)?
            .map(|sentence| self.extract_features_from_sentence(&sentence.text))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            "Extracted {} records from {} pages ({} bytes)",
            records.len(),
            document.page_count(),
            text.len()
        );

        Ok(records)
    }

    /// Feature records for the PDF at `path`
    pub fn extract_features_from_pdf(
        &self,
        path: &Path,
    ) -> Result<Vec<FeatureRecord>, ExtractorError> {
        let start_time = Instant::now();
        info!("Extracting features from {}", path.display());

        let document = self.load_file(path)?;
        let records = self.extract_features_from_document(&document)?;

        info!(
            "Extraction complete for {}: {} sentences in {} ms",
            path.display(),
            records.len(),
            start_time.elapsed().as_millis()
        );

        Ok(records)
    }

    /// Open a single PDF with the configured backend
    pub fn load_file(&self, path: &Path) -> Result<P::Document, ExtractorError> {
        load_file(&self.backend, path)
    }

    /// Open every PDF in `dir` under the configured folder policy
    pub fn load_folder(&self, dir: &Path) -> Result<FolderLoad<P::Document>, ExtractorError> {
        load_folder(&self.backend, dir, self.config.folder_policy)
    }

    /// Feature records for every PDF in `dir`, ordered by file name
    ///
    /// Documents are processed one after another. Under `SkipAndReport` a
    /// failing file is recorded and does not affect the records of others.
    pub fn extract_features_from_folder(
        &self,
        dir: &Path,
    ) -> Result<FolderFeatures, ExtractorError> {
        let FolderLoad {
            documents: loaded,
            mut failures,
        } = self.load_folder(dir)?;

        let mut documents = Vec::with_capacity(loaded.len());
        for (name, document) in loaded {
            match self.extract_features_from_document(&document) {
                Ok(records) => documents.push(DocumentFeatures {
                    source: name,
                    records,
                }),
                Err(e) if self.config.folder_policy == FolderPolicy::SkipAndReport => {
                    warn!("Skipping {}: {}", name, e);
                    failures.push(LoadFailure {
                        file_name: name,
                        kind: e.kind().to_string(),
                        reason: e.to_string(),
                    });
                }
                Err(e) => return Err(e),
            }
        }

        failures.sort_by(|a, b| a.file_name.cmp(&b.file_name));

        info!(
            "Folder {} complete: {} documents, {} failures",
            dir.display(),
            documents.len(),
            failures.len()
        );

        Ok(FolderFeatures {
            documents,
            failures,
        })
    }
}
