//! Sentence importance classification

use crate::assets::NlpAssets;
use crate::chunker::{chunk_entities, Chunk};
use crate::tagger::HeuristicTagger;
use crate::tokenizer::word_tokenize;
use newsbrief_domain::EntityClassifier;

/// Entity classifier built on the heuristic tagger and binary chunker
///
/// Tokenizes with original casing, tags, chunks, and reports whether any
/// chunk is an entity.
#[derive(Debug, Clone, Default)]
pub struct HeuristicEntityClassifier {
    tagger: HeuristicTagger,
}

impl HeuristicEntityClassifier {
    /// Create a classifier around a tagger
    pub fn new(tagger: HeuristicTagger) -> Self {
        Self { tagger }
    }

    /// Create a classifier from loaded assets
    ///
    /// Stopwords count as common words too, so a capitalized stopword at the
    /// start of a sentence is never read as a name.
    pub fn from_assets(assets: &NlpAssets) -> Self {
        let lexicon = assets
            .lexicon
            .iter()
            .chain(assets.stopwords.iter())
            .cloned()
            .collect();
        Self::new(HeuristicTagger::new(lexicon))
    }

    /// Entity chunks of a sentence
    pub fn chunks(&self, sentence: &str) -> Vec<Chunk> {
        let tokens = word_tokenize(sentence);
        if tokens.is_empty() {
            return Vec::new();
        }
        chunk_entities(self.tagger.tag(&tokens))
    }

    /// Text of every entity in the sentence, in order
    pub fn entities(&self, sentence: &str) -> Vec<String> {
        self.chunks(sentence)
            .iter()
            .filter(|chunk| chunk.is_entity())
            .map(Chunk::text)
            .collect()
    }
}

impl EntityClassifier for HeuristicEntityClassifier {
    fn classify(&self, sentence: &str) -> bool {
        self.chunks(sentence).iter().any(Chunk::is_entity)
    }
}
