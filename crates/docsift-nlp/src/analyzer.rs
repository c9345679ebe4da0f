//! Rule-based English analyzer

use crate::dates::DateRecognizer;
use crate::segmenter::split_sentences;
use crate::tokenizer::tokenize;
use crate::NlpError;
use docsift_domain::traits::TextAnalyzer;
use docsift_domain::{Analysis, SentenceSpan};
use tracing::trace;

/// Default maximum input length in bytes
pub const DEFAULT_MAX_LENGTH: usize = 1_000_000;

/// Deterministic analyzer combining the segmenter, tokenizer and date recognizer
///
/// Construction compiles all recognition rules, so create it once and share it.
pub struct RuleBasedAnalyzer {
    recognizer: DateRecognizer,
    max_length: usize,
}

impl RuleBasedAnalyzer {
    /// Build the analyzer
    pub fn new() -> Result<Self, NlpError> {
        Ok(Self {
            recognizer: DateRecognizer::new()?,
            max_length: DEFAULT_MAX_LENGTH,
        })
    }

    /// Set the maximum input length in bytes
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    /// Maximum input length in bytes
    pub fn max_length(&self) -> usize {
        self.max_length
    }
}

impl std::fmt::Debug for RuleBasedAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleBasedAnalyzer")
            .field("max_length", &self.max_length)
            .finish()
    }
}

impl TextAnalyzer for RuleBasedAnalyzer {
    type Error = NlpError;

    fn analyze(&self, text: &str) -> Result<Analysis, Self::Error> {
        if text.len() > self.max_length {
            return Err(NlpError::TextTooLong(text.len(), self.max_length));
        }

        let sentences: Vec<SentenceSpan> = split_sentences(text)
            .into_iter()
            .filter_map(|(start, end)| SentenceSpan::from_source(text, start, end))
            .collect();
        let tokens = tokenize(text);
        let entities = self.recognizer.recognize(text);

        trace!(
            "Analyzed {} bytes: {} sentences, {} tokens, {} entities",
            text.len(),
            sentences.len(),
            tokens.len(),
            entities.len()
        );

        Ok(Analysis {
            sentences,
            entities,
            tokens,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_combines_passes() {
        let analyzer = RuleBasedAnalyzer::new().unwrap();
        let text = "Email ann@example.com by Friday. Thanks.";
        let analysis = analyzer.analyze(text).unwrap();

        assert_eq!(analysis.sentences.len(), 2);
        assert_eq!(analysis.sentences[0].text, "Email ann@example.com by Friday.");
        assert_eq!(analysis.sentences[1].start, 33);
        assert!(analysis.tokens.iter().any(|t| t.text == "ann@example.com"));
        assert_eq!(analysis.dates().count(), 1);
    }

    #[test]
    fn test_analyze_empty_text() {
        let analyzer = RuleBasedAnalyzer::new().unwrap();
        let analysis = analyzer.analyze("").unwrap();
        assert_eq!(analysis, Analysis::default());
    }

    #[test]
    fn test_text_too_long() {
        let analyzer = RuleBasedAnalyzer::new().unwrap().with_max_length(10);
        let result = analyzer.analyze("this text is longer than ten bytes");
        assert!(matches!(result, Err(NlpError::TextTooLong(34, 10))));
    }

    #[test]
    fn test_deterministic() {
        let analyzer = RuleBasedAnalyzer::new().unwrap();
        let text = "On June 5, 2023 we met. Call 555-0100 tomorrow.";
        assert_eq!(analyzer.analyze(text).unwrap(), analyzer.analyze(text).unwrap());
    }
}
