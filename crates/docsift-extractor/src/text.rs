//! Text acquisition from opened documents

use crate::error::ExtractorError;
use docsift_domain::traits::PdfDocument;
use std::fmt::Display;
use tracing::debug;

/// Concatenate the text of every page in order, with no separator
///
/// A document without pages yields an empty string. The first page that
/// fails to extract aborts acquisition.
pub fn get_document_text<D>(document: &D) -> Result<String, ExtractorError>
where
    D: PdfDocument,
    D::Error: Display,
{
    let page_count = document.page_count();
    let mut text = String::new();

    for index in 0..page_count {
        let page = document
            .page_text(index)
            .map_err(|e| ExtractorError::Extraction(e.to_string()))?;
        debug!("Page {}/{}: {} bytes", index + 1, page_count, page.len());
        text.push_str(&page);
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use docsift_pdf::MemoryDocument;
    use proptest::prelude::*;

    #[test]
    fn test_zero_pages_yield_empty_text() {
        let text = get_document_text(&MemoryDocument::empty()).unwrap();
        assert_eq!(text, "");
    }

    #[test]
    fn test_pages_joined_without_separator() {
        let document = MemoryDocument::new(["First page.", "Second", " page."]);
        let text = get_document_text(&document).unwrap();
        assert_eq!(text, "First page.Second page.");
    }

    #[test]
    fn test_image_only_page_is_empty_not_error() {
        let document = MemoryDocument::new(["Text.", "", "More."]);
        assert_eq!(get_document_text(&document).unwrap(), "Text.More.");
    }

    #[test]
    fn test_corrupt_page_propagates() {
        let document = MemoryDocument::new(["ok"]).with_corrupt_page();
        let result = get_document_text(&document);
        assert!(matches!(result, Err(ExtractorError::Extraction(_))));
    }

    proptest! {
        #[test]
        fn prop_text_is_concatenation_of_pages(pages in proptest::collection::vec(".{0,40}", 0..8)) {
            let document = MemoryDocument::new(pages.clone());
            let text = get_document_text(&document).unwrap();
            prop_assert_eq!(text, pages.concat());
        }
    }
}
