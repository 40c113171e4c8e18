//! newsbrief Domain Layer
//!
//! This crate contains the data model for a single summarization run.
//! It has no external dependencies and defines the value types and the
//! trait seam that the NLP and fetch layers plug into.
//!
//! ## Key Concepts
//!
//! - **Corpus**: all fetched article text for one run, concatenated in link order
//! - **Token**: a normalized (lowercase, alphanumeric) word used for counting
//! - **Salient terms**: the most frequent tokens of the corpus
//! - **Sentence**: a segment of the corpus as produced by the segmenter
//! - **Bullet item**: a selected sentence, trimmed and prefixed with `- `
//!
//! Everything here lives for exactly one run. Nothing is persisted.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bullet;
pub mod corpus;
pub mod sentence;
pub mod term;
pub mod traits;

// Re-exports for convenience
pub use bullet::{BulletItem, BulletReport, BULLET_MARKER, MAX_BULLET_ITEMS};
pub use corpus::Corpus;
pub use sentence::Sentence;
pub use term::{SalientTerms, TermFrequencyTable, Token, SALIENT_TERM_LIMIT};
pub use traits::EntityClassifier;
