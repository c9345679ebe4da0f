//! Trait definitions for external capabilities
//!
//! These traits define the boundaries between the extraction pipeline and the
//! PDF decoding / natural-language analysis it delegates to.
//! Implementations live in other crates.

use crate::Analysis;
use std::path::Path;

/// Trait for natural-language analysis
///
/// Implemented by the adapter layer (docsift-nlp). An analyzer is expensive to
/// construct and is meant to be created once and shared read-only.
pub trait TextAnalyzer {
    /// Error type for analysis operations
    type Error;

    /// Segment, tokenize and run entity recognition over `text`
    fn analyze(&self, text: &str) -> Result<Analysis, Self::Error>;
}

/// Trait for an opened, decoded PDF
///
/// Implemented by the adapter layer (docsift-pdf)
pub trait PdfDocument {
    /// Error type for page text extraction
    type Error;

    /// Number of pages in document order
    fn page_count(&self) -> usize;

    /// Lossy text of the page at `index` (zero-based)
    ///
    /// Image-only pages yield an empty string, not an error.
    fn page_text(&self, index: usize) -> Result<String, Self::Error>;
}

/// Trait for opening PDF files
///
/// Implemented by the adapter layer (docsift-pdf)
pub trait PdfBackend {
    /// Document handle produced by this backend
    type Document: PdfDocument;

    /// Error type for open operations
    type Error;

    /// Decode the PDF at `path`
    fn open(&self, path: &Path) -> Result<Self::Document, Self::Error>;
}
