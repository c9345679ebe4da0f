//! docsift Extractor
//!
//! Turns PDF documents into per-sentence feature records.
//!
//! # Overview
//!
//! Each document's text is acquired page by page, split into sentences by a
//! `TextAnalyzer`, and every sentence becomes one `FeatureRecord` holding the
//! sentence text, the DATE entities found in it and the email-like tokens it
//! contains.
//!
//! # Architecture
//!
//! ```text
//! Folder → Loader → PdfDocument → Text → Sentences → FeatureRecords
//! ```
//!
//! # Key Features
//!
//! - **Discovery**: non-recursive listing of `.pdf` files, sorted by name
//! - **Sentence Records**: one record per sentence, in document order
//! - **Date Entities**: sentence-relative DATE spans from the analyzer
//! - **Email Tokens**: whole tokens that start with an address
//! - **Folder Policy**: abort on the first failure or skip and report
//!
//! # Example Usage
//!
//! ```no_run
//! use docsift_extractor::{ExtractorConfig, FeatureExtractor};
//! use docsift_nlp::RuleBasedAnalyzer;
//! use docsift_pdf::LopdfBackend;
//! use std::path::Path;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let analyzer = RuleBasedAnalyzer::new()?;
//! let extractor = FeatureExtractor::new(analyzer, LopdfBackend, ExtractorConfig::default())?;
//!
//! for record in extractor.extract_features_from_pdf(Path::new("report.pdf"))? {
//!     println!("{} ({} dates, {:?})", record.text, record.dates.len(), record.email_addresses);
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod emails;
mod error;
mod extractor;
mod loader;
mod text;
mod types;


pub use config::{ExtractorConfig, FolderPolicy};
pub use emails::{EmailMatcher, EMAIL_PATTERN};
pub use error::ExtractorError;
pub use extractor::FeatureExtractor;
pub use loader::{get_pdf_files, has_pdf_extension, load_file, load_folder, PDF_EXTENSION};
pub use text::get_document_text;
pub use types::{DocumentFeatures, FeatureRecord, FolderFeatures, FolderLoad, LoadFailure};
