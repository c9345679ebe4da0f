//! Output types for extraction

use docsift_domain::EntitySpan;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Features extracted from one sentence
///
/// Date offsets are relative to `text`, not to the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureRecord {
    /// Sentence text, verbatim
    pub text: String,

    /// Date mentions found in the sentence
    pub dates: Vec<EntitySpan>,

    /// Email-like tokens found in the sentence
    pub email_addresses: Vec<String>,
}

/// Feature records for one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentFeatures {
    /// File name of the source document
    pub source: String,

    /// One record per sentence, in document order
    pub records: Vec<FeatureRecord>,
}

/// A file that could not be processed during a folder run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadFailure {
    /// File name within the folder
    pub file_name: String,

    /// Error kind (see `ExtractorError::kind`)
    pub kind: String,

    /// Reason for failure
    pub reason: String,
}

/// Result of loading every PDF in a folder
#[derive(Debug)]
pub struct FolderLoad<D> {
    /// Loaded documents keyed by file name
    pub documents: BTreeMap<String, D>,

    /// Files that failed to load (always empty under `AbortOnError`)
    pub failures: Vec<LoadFailure>,
}

impl<D> Default for FolderLoad<D> {
    fn default() -> Self {
        Self {
            documents: BTreeMap::new(),
            failures: Vec::new(),
        }
    }
}

/// Result of extracting features from every PDF in a folder
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderFeatures {
    /// Documents processed successfully, ordered by file name
    pub documents: Vec<DocumentFeatures>,

    /// Files that failed (always empty under `AbortOnError`)
    pub failures: Vec<LoadFailure>,
}
