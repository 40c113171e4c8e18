//! newsbrief NLP
//!
//! Turns a corpus of article text into a short bullet list of important
//! sentences.
//!
//! # Architecture
//!
//! ```text
//! setup (assets) → NlpToolkit ─┬→ SentenceSegmenter
//!                              ├→ Tokenizer → FrequencyRanker
//!                              ├→ HeuristicEntityClassifier (tagger + chunker)
//!                              └→ BulletGenerator → BulletReport
//! ```
//!
//! A sentence is important when it contains one of the 50 most frequent
//! normalized terms, mentions a named entity, and is not promotional
//! boilerplate or a raw link. At most 10 sentences are kept.
//!
//! # Example Usage
//!
//! ```
//! use newsbrief_nlp::NlpToolkit;
//!
//! # fn example() -> Result<(), newsbrief_nlp::NlpError> {
//! let toolkit = NlpToolkit::embedded();
//! let generator = toolkit.bullet_generator()?;
//!
//! let report = generator.generate(
//!     "The Boston Celtics won the championship. It was a historic win for the team.",
//! );
//! assert_eq!(report.to_string(), "- The Boston Celtics won the championship.");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]

mod assets;
mod chunker;
mod classifier;
mod config;
mod error;
mod filters;
mod ranker;
mod segmenter;
mod stopwords;
mod summarizer;
mod tagger;
mod tokenizer;
mod toolkit;

#[cfg(test)]
mod tests;

pub use assets::{ensure_installed, AssetKind, InstallReport, NlpAssets};
pub use chunker::{chunk_entities, Chunk};
pub use classifier::HeuristicEntityClassifier;
pub use config::{NlpConfig, DATA_DIR_NAME};
pub use error::NlpError;
pub use filters::{Exclusion, ExclusionFilter};
pub use ranker::FrequencyRanker;
pub use segmenter::SentenceSegmenter;
pub use stopwords::{english_stopwords, StopwordFilter};
pub use summarizer::BulletGenerator;
pub use tagger::{HeuristicTagger, PosTag, TaggedToken};
pub use tokenizer::{word_tokenize, Tokenizer};
pub use toolkit::NlpToolkit;
