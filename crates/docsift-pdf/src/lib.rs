//! docsift PDF Layer
//!
//! PDF decoding implementations of the `PdfBackend` and `PdfDocument` traits
//! from `docsift-domain`.
//!
//! # Backends
//!
//! - `LopdfBackend`: decodes files from disk with `lopdf`
//! - `MemoryDocument`: in-memory pages for testing
//!
//! # Examples
//!
//! ```
//! use docsift_pdf::MemoryDocument;
//! use docsift_domain::traits::PdfDocument;
//!
//! let document = MemoryDocument::new(["First page. ", "Second page."]);
//! assert_eq!(document.page_count(), 2);
//! assert_eq!(document.page_text(1).unwrap(), "Second page.");
//! ```

#![warn(missing_docs)]

pub mod lopdf_backend;
pub mod writer;

use docsift_domain::traits::PdfDocument;
use thiserror::Error;

pub use lopdf_backend::{LopdfBackend, LopdfDocument};
pub use writer::{build_text_pdf, write_text_pdf};

/// Errors that can occur while decoding PDFs
#[derive(Error, Debug)]
pub enum PdfError {
    /// File could not be parsed as a PDF
    #[error("Failed to load PDF: {0}")]
    Load(String),

    /// Page content could not be decoded into text
    #[error("Failed to extract text from page {page}: {message}")]
    PageText {
        /// One-based page number
        page: usize,
        /// Underlying decoder message
        message: String,
    },

    /// Requested page index is past the last page
    #[error("Page not found: {0}")]
    PageNotFound(usize),

    /// PDF could not be written
    #[error("Failed to write PDF: {0}")]
    Write(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// In-memory document for deterministic testing
///
/// Pages are returned exactly as given. Individual pages can be marked as
/// corrupt so that page extraction fails for them.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    pages: Vec<Option<String>>,
}

impl MemoryDocument {
    /// Create a document from page texts in order
    pub fn new<I, S>(pages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            pages: pages.into_iter().map(|p| Some(p.into())).collect(),
        }
    }

    /// Create a document with no pages
    pub fn empty() -> Self {
        Self::default()
    }

    /// Append a page whose text extraction fails
    pub fn with_corrupt_page(mut self) -> Self {
        self.pages.push(None);
        self
    }
}

impl PdfDocument for MemoryDocument {
    type Error = PdfError;

    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_text(&self, index: usize) -> Result<String, Self::Error> {
        match self.pages.get(index) {
            Some(Some(text)) => Ok(text.clone()),
            Some(None) => Err(PdfError::PageText {
                page: index + 1,
                message: "corrupt content stream".to_string(),
            }),
            None => Err(PdfError::PageNotFound(index)),
        }
    }
}
