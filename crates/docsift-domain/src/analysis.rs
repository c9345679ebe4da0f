//! Result of one analyzer pass over one text

use crate::span::{EntitySpan, SentenceSpan, Token};

/// Everything a single NLP pass produces for a text
///
/// All offsets refer to the text passed to [`crate::TextAnalyzer::analyze`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Analysis {
    /// Sentences in document order
    pub sentences: Vec<SentenceSpan>,

    /// Recognized entities, ordered by start offset
    pub entities: Vec<EntitySpan>,

    /// Token stream in document order
    pub tokens: Vec<Token>,
}

impl Analysis {
    /// Entities labeled as dates
    pub fn dates(&self) -> impl Iterator<Item = &EntitySpan> {
        self.entities.iter().filter(|e| e.is_date())
    }
}
