//! docsift Domain Layer
//!
//! This crate contains the value types and capability traits shared by every
//! other docsift crate. It defines what the pipeline consumes and produces
//! without depending on any concrete PDF or NLP implementation.
//!
//! ## Key Concepts
//!
//! - **Sentence Span**: a substring identified as one sentence, with offsets
//! - **Entity Span**: a labeled substring (e.g. a date mention)
//! - **Token**: one unit of the analyzer's token stream
//! - **Analysis**: everything one NLP pass produces for one text
//!
//! ## Architecture
//!
//! - Pure data and trait definitions only
//! - Adapters (`docsift-pdf`, `docsift-nlp`) implement the traits
//! - The extractor is generic over the traits, so adapters are injected

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod span;
pub mod traits;

// Re-exports for convenience
pub use analysis::Analysis;
pub use span::{EntityLabel, EntitySpan, SentenceSpan, Token};
pub use traits::{PdfBackend, PdfDocument, TextAnalyzer};
