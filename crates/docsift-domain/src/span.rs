//! Span module - offsets and labels produced by text analysis

use serde::{Deserialize, Serialize};
use std::fmt;

/// Label string an analyzer uses for date mentions
pub const DATE_LABEL: &str = "DATE";

/// Label attached to an entity span
///
/// Analyzers report labels as loose strings. Only `DATE` is meaningful to the
/// pipeline; every other label is kept verbatim in the `Other` bucket so it
/// can still be logged or displayed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EntityLabel {
    /// A date mention (`DATE`)
    Date,

    /// Any label the pipeline does not act on
    Other(String),
}

impl EntityLabel {
    /// Map a raw analyzer label onto the tagged representation
    ///
    /// # Examples
    ///
    /// ```
    /// use docsift_domain::EntityLabel;
    ///
    /// assert_eq!(EntityLabel::from_label("DATE"), EntityLabel::Date);
    /// assert_eq!(
    ///     EntityLabel::from_label("TIME"),
    ///     EntityLabel::Other("TIME".to_string())
    /// );
    /// ```
    pub fn from_label(label: &str) -> Self {
        if label == DATE_LABEL {
            EntityLabel::Date
        } else {
            EntityLabel::Other(label.to_string())
        }
    }

    /// Get the raw label string
    pub fn as_str(&self) -> &str {
        match self {
            EntityLabel::Date => DATE_LABEL,
            EntityLabel::Other(label) => label,
        }
    }

    /// Whether this is a date label
    pub fn is_date(&self) -> bool {
        matches!(self, EntityLabel::Date)
    }
}

impl From<String> for EntityLabel {
    fn from(label: String) -> Self {
        if label == DATE_LABEL {
            EntityLabel::Date
        } else {
            EntityLabel::Other(label)
        }
    }
}

impl From<EntityLabel> for String {
    fn from(label: EntityLabel) -> Self {
        match label {
            EntityLabel::Date => DATE_LABEL.to_string(),
            EntityLabel::Other(label) => label,
        }
    }
}

impl fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A sentence identified by the analyzer
///
/// Offsets are byte offsets into the text that was analyzed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceSpan {
    /// Sentence text
    pub text: String,

    /// Start byte offset (inclusive)
    pub start: usize,

    /// End byte offset (exclusive)
    pub end: usize,
}

impl SentenceSpan {
    /// Create a span by slicing `source` at the given byte offsets
    ///
    /// Returns `None` if the offsets are out of range or not on char boundaries.
    pub fn from_source(source: &str, start: usize, end: usize) -> Option<Self> {
        source.get(start..end).map(|text| Self {
            text: text.to_string(),
            start,
            end,
        })
    }
}

/// A labeled entity identified by the analyzer
///
/// Offsets are relative to whatever text was analyzed: a whole document or a
/// single sentence. Two passes over different texts produce independent spans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySpan {
    /// Entity text
    pub text: String,

    /// Entity label
    pub label: EntityLabel,

    /// Start byte offset (inclusive)
    pub start: usize,

    /// End byte offset (exclusive)
    pub end: usize,
}

impl EntitySpan {
    /// Create a new entity span
    pub fn new(text: impl Into<String>, label: EntityLabel, start: usize, end: usize) -> Self {
        Self {
            text: text.into(),
            label,
            start,
            end,
        }
    }

    /// Whether this entity is a date mention
    pub fn is_date(&self) -> bool {
        self.label.is_date()
    }
}

/// One token of the analyzer's token stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Token text
    pub text: String,

    /// Start byte offset (inclusive)
    pub start: usize,

    /// End byte offset (exclusive)
    pub end: usize,
}

impl Token {
    /// Create a new token
    pub fn new(text: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            text: text.into(),
            start,
            end,
        }
    }
}
