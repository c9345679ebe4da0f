//! Error types for the Extractor

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during feature extraction
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Folder input is not a directory
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// Path does not carry the `.pdf` extension
    #[error("Unsupported file (expected a .pdf path): {}", .0.display())]
    UnsupportedFile(PathBuf),

    /// PDF decoding or page text extraction failed
    #[error("Extraction error: {0}")]
    Extraction(String),

    /// Natural-language analysis failed
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Document text exceeds the configured maximum
    #[error("Text too long: {0} bytes (max: {1})")]
    TextTooLong(usize, usize),

    /// Directory listing failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ExtractorError {
    /// Short machine-readable name of the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            ExtractorError::NotADirectory(_) => "not_a_directory",
            ExtractorError::UnsupportedFile(_) => "unsupported_file",
            ExtractorError::Extraction(_) => "extraction",
            ExtractorError::Analysis(_) => "analysis",
            ExtractorError::TextTooLong(_, _) => "text_too_long",
            ExtractorError::Io(_) => "io",
            ExtractorError::Config(_) => "config",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_path() {
        let err = ExtractorError::UnsupportedFile(PathBuf::from("notes/foo.txt"));
        assert!(err.to_string().contains("foo.txt"));
        assert_eq!(err.kind(), "unsupported_file");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: ExtractorError = io.into();
        assert_eq!(err.kind(), "io");
    }
}
