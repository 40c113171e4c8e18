//! Binary named-entity chunking
//!
//! Groups tagged tokens into chunks. A maximal run of proper nouns becomes one
//! entity chunk; every other token stands alone. Entities are not typed.

use crate::tagger::{PosTag, TaggedToken};

/// A chunk of a tagged sentence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Chunk {
    /// A named entity spanning one or more tokens
    Entity(Vec<TaggedToken>),
    /// A token outside any entity
    Token(TaggedToken),
}

impl Chunk {
    /// True for entity chunks
    pub fn is_entity(&self) -> bool {
        matches!(self, Chunk::Entity(_))
    }

    /// Chunk text, tokens joined by single spaces
    pub fn text(&self) -> String {
        match self {
            Chunk::Entity(tokens) => tokens
                .iter()
                .map(|t| t.text.as_str())
                .collect::<Vec<_>>()
                .join(" "),
            Chunk::Token(token) => token.text.clone(),
        }
    }
}

/// Chunk a tagged sentence in binary (entity / non-entity) mode
pub fn chunk_entities(tagged: Vec<TaggedToken>) -> Vec<Chunk> {
    let mut chunks = Vec::new();
    let mut run: Vec<TaggedToken> = Vec::new();

    for token in tagged {
        if token.tag == PosTag::ProperNoun {
            run.push(token);
            continue;
        }
        if !run.is_empty() {
            chunks.push(Chunk::Entity(std::mem::take(&mut run)));
        }
        chunks.push(Chunk::Token(token));
    }
    if !run.is_empty() {
        chunks.push(Chunk::Entity(run));
    }

    chunks
}
