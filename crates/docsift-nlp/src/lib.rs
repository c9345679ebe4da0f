//! docsift NLP Layer
//!
//! Natural-language analysis implementations of the `TextAnalyzer` trait from
//! `docsift-domain`.
//!
//! # Analyzers
//!
//! - `RuleBasedAnalyzer`: deterministic English sentence segmentation,
//!   tokenization and DATE/TIME recognition
//! - `MockAnalyzer`: canned analyses for testing
//!
//! # Examples
//!
//! ```
//! use docsift_nlp::RuleBasedAnalyzer;
//! use docsift_domain::traits::TextAnalyzer;
//!
//! let analyzer = RuleBasedAnalyzer::new().unwrap();
//! let analysis = analyzer.analyze("We met on March 3, 2021. It rained.").unwrap();
//! assert_eq!(analysis.sentences.len(), 2);
//! assert_eq!(analysis.dates().next().unwrap().text, "March 3, 2021");
//! ```

#![warn(missing_docs)]

pub mod analyzer;
pub mod dates;
pub mod segmenter;
pub mod tokenizer;

use docsift_domain::traits::TextAnalyzer;
use docsift_domain::Analysis;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use analyzer::RuleBasedAnalyzer;

/// Errors that can occur during analysis
#[derive(Error, Debug)]
pub enum NlpError {
    /// Recognizer patterns failed to build
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Input is longer than the analyzer accepts
    #[error("Text of length {0} exceeds maximum of {1}")]
    TextTooLong(usize, usize),

    /// Generic error
    #[error("NLP error: {0}")]
    Other(String),
}

/// Mock analyzer for deterministic testing
///
/// Returns pre-configured analyses without running any recognition.
///
/// # Examples
///
/// ```
/// use docsift_nlp::MockAnalyzer;
/// use docsift_domain::traits::TextAnalyzer;
/// use docsift_domain::Analysis;
///
/// let mut analyzer = MockAnalyzer::default();
/// analyzer.add_error("bad text");
/// assert!(analyzer.analyze("bad text").is_err());
/// assert_eq!(analyzer.analyze("anything").unwrap(), Analysis::default());
/// assert_eq!(analyzer.call_count(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockAnalyzer {
    default_analysis: Analysis,
    responses: Arc<Mutex<HashMap<String, Option<Analysis>>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockAnalyzer {
    /// Create a new MockAnalyzer returning `analysis` for every text
    pub fn new(analysis: Analysis) -> Self {
        Self {
            default_analysis: analysis,
            responses: Arc::new(Mutex::new(HashMap::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Add a specific analysis for a given text
    pub fn add_response(&mut self, text: impl Into<String>, analysis: Analysis) {
        self.responses
            .lock()
            .unwrap()
            .insert(text.into(), Some(analysis));
    }

    /// Configure to return an error for a specific text
    pub fn add_error(&mut self, text: impl Into<String>) {
        self.responses.lock().unwrap().insert(text.into(), None);
    }

    /// Get the number of times analyze was called
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Reset the call count
    pub fn reset_call_count(&self) {
        *self.call_count.lock().unwrap() = 0;
    }
}

impl TextAnalyzer for MockAnalyzer {
    type Error = NlpError;

    fn analyze(&self, text: &str) -> Result<Analysis, Self::Error> {
        *self.call_count.lock().unwrap() += 1;

        let responses = self.responses.lock().unwrap();
        match responses.get(text) {
            Some(Some(analysis)) => Ok(analysis.clone()),
            Some(None) => Err(NlpError::Other("Mock error".to_string())),
            None => Ok(self.default_analysis.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docsift_domain::SentenceSpan;

    fn one_sentence(text: &str) -> Analysis {
        Analysis {
            sentences: vec![SentenceSpan {
                text: text.to_string(),
                start: 0,
                end: text.len(),
            }],
            ..Analysis::default()
        }
    }

    #[test]
    fn test_mock_analyzer_default() {
        let analyzer = MockAnalyzer::new(one_sentence("x"));
        let analysis = analyzer.analyze("whatever").unwrap();
        assert_eq!(analysis.sentences.len(), 1);
    }

    #[test]
    fn test_mock_analyzer_specific_responses() {
        let mut analyzer = MockAnalyzer::default();
        analyzer.add_response("hello", one_sentence("hello"));

        assert_eq!(analyzer.analyze("hello").unwrap().sentences[0].text, "hello");
        assert!(analyzer.analyze("other").unwrap().sentences.is_empty());
    }

    #[test]
    fn test_mock_analyzer_call_count() {
        let analyzer = MockAnalyzer::default();
        assert_eq!(analyzer.call_count(), 0);

        analyzer.analyze("a").unwrap();
        analyzer.analyze("b").unwrap();
        assert_eq!(analyzer.call_count(), 2);

        analyzer.reset_call_count();
        assert_eq!(analyzer.call_count(), 0);
    }

    #[test]
    fn test_mock_analyzer_error() {
        let mut analyzer = MockAnalyzer::default();
        analyzer.add_error("bad");

        let result = analyzer.analyze("bad");
        assert!(matches!(result.unwrap_err(), NlpError::Other(_)));
    }

    #[test]
    fn test_mock_analyzer_clone_shares_state() {
        let first = MockAnalyzer::default();
        let second = first.clone();

        first.analyze("text").unwrap();

        assert_eq!(first.call_count(), 1);
        assert_eq!(second.call_count(), 1);
    }
}
