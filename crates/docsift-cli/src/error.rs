//! Error types for the CLI application.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Extraction error
    #[error("{0}")]
    Extractor(#[from] docsift_extractor::ExtractorError),

    /// Analyzer construction error
    #[error("Analyzer error: {0}")]
    Nlp(#[from] docsift_nlp::NlpError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Document did not finish within the configured timeout
    #[error("Timed out after {secs}s: {}", path.display())]
    Timeout {
        /// Document path
        path: PathBuf,
        /// Timeout in seconds
        secs: u64,
    },

    /// Blocking worker failed
    #[error("Worker failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl CliError {
    /// Short machine-readable name for failure reports.
    pub fn kind(&self) -> &'static str {
        match self {
            CliError::Extractor(e) => e.kind(),
            CliError::Timeout { .. } => "timeout",
            CliError::Config(_) => "config",
            CliError::Nlp(_) => "analysis",
            CliError::Io(_) => "io",
            CliError::Serialization(_) | CliError::Toml(_) => "serialization",
            CliError::Task(_) => "task",
        }
    }
}
