//! Integration tests for docsift-pdf
//!
//! These tests write real PDFs to disk and read them back through the
//! `PdfBackend` trait.

use docsift_domain::traits::{PdfBackend, PdfDocument};
use docsift_pdf::{write_text_pdf, LopdfBackend, PdfError};

#[test]
fn test_pages_come_back_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("three.pdf");
    write_text_pdf(&path, &["Alpha page.", "Beta page.", "Gamma page."]).unwrap();

    let document = LopdfBackend::new().open(&path).unwrap();
    assert_eq!(document.page_count(), 3);

    let pages: Vec<String> = (0..document.page_count())
        .map(|i| document.page_text(i).unwrap())
        .collect();
    assert!(pages[0].contains("Alpha"));
    assert!(pages[1].contains("Beta"));
    assert!(pages[2].contains("Gamma"));
}

#[test]
fn test_missing_file_fails_to_load() {
    let dir = tempfile::tempdir().unwrap();
    let result = LopdfBackend::new().open(&dir.path().join("missing.pdf"));
    assert!(matches!(result, Err(PdfError::Load(_))));
}

#[test]
fn test_truncated_file_fails_to_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("truncated.pdf");
    std::fs::write(&path, b"plain text pretending to be a pdf").unwrap();

    assert!(LopdfBackend::new().open(&path).is_err());
}
