//! `lopdf` backend
//!
//! Decodes PDF files from disk and extracts lossy per-page text.

use crate::PdfError;
use docsift_domain::traits::{PdfBackend, PdfDocument};
use lopdf::Document;
use std::path::Path;
use tracing::debug;

/// Opens PDF files with `lopdf`
#[derive(Debug, Clone, Copy, Default)]
pub struct LopdfBackend;

impl LopdfBackend {
    /// Create a new backend
    pub fn new() -> Self {
        Self
    }
}

impl PdfBackend for LopdfBackend {
    type Document = LopdfDocument;
    type Error = PdfError;

    fn open(&self, path: &Path) -> Result<Self::Document, Self::Error> {
        let document = Document::load(path).map_err(|e| PdfError::Load(e.to_string()))?;
        Ok(LopdfDocument::from_document(document))
    }
}

/// A decoded PDF
pub struct LopdfDocument {
    inner: Document,
    page_numbers: Vec<u32>,
}

impl LopdfDocument {
    /// Wrap an already-decoded `lopdf` document
    pub fn from_document(inner: Document) -> Self {
        // get_pages is keyed by one-based page number, so keys come out in page order
        let page_numbers: Vec<u32> = inner.get_pages().into_keys().collect();
        debug!("Decoded PDF with {} pages", page_numbers.len());
        Self {
            inner,
            page_numbers,
        }
    }

    /// Decode a PDF from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PdfError> {
        let document = Document::load_mem(bytes).map_err(|e| PdfError::Load(e.to_string()))?;
        Ok(Self::from_document(document))
    }
}

impl std::fmt::Debug for LopdfDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LopdfDocument")
            .field("pages", &self.page_numbers.len())
            .finish()
    }
}

impl PdfDocument for LopdfDocument {
    type Error = PdfError;

    fn page_count(&self) -> usize {
        self.page_numbers.len()
    }

    fn page_text(&self, index: usize) -> Result<String, Self::Error> {
        let page_number = *self
            .page_numbers
            .get(index)
            .ok_or(PdfError::PageNotFound(index))?;

        self.inner
            .extract_text(&[page_number])
            .map_err(|e| PdfError::PageText {
                page: page_number as usize,
                message: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::build_text_pdf;

    #[test]
    fn test_open_generated_pdf() {
        let bytes = build_text_pdf(&["Hello from page one."]).unwrap();
        let document = LopdfDocument::from_bytes(&bytes).unwrap();

        assert_eq!(document.page_count(), 1);
        assert!(document.page_text(0).unwrap().contains("Hello from page one."));
    }

    #[test]
    fn test_page_out_of_range() {
        let bytes = build_text_pdf(&["Only page."]).unwrap();
        let document = LopdfDocument::from_bytes(&bytes).unwrap();

        assert!(matches!(document.page_text(1), Err(PdfError::PageNotFound(1))));
    }

    #[test]
    fn test_garbage_bytes_fail_to_load() {
        let result = LopdfDocument::from_bytes(b"definitely not a pdf");
        assert!(matches!(result, Err(PdfError::Load(_))));
    }
}
