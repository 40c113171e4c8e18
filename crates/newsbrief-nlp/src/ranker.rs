//! Term frequency ranking

use crate::tokenizer::Tokenizer;
use newsbrief_domain::{SalientTerms, TermFrequencyTable};
use tracing::debug;

/// Counts normalized tokens over a corpus and picks the salient terms
#[derive(Debug, Clone, Default)]
pub struct FrequencyRanker {
    tokenizer: Tokenizer,
}

impl FrequencyRanker {
    /// Create a ranker using the given tokenizer
    pub fn new(tokenizer: Tokenizer) -> Self {
        Self { tokenizer }
    }

    /// Frequency table of every normalized token in the corpus
    pub fn frequencies(&self, corpus: &str) -> TermFrequencyTable {
        TermFrequencyTable::from_tokens(self.tokenizer.normalize(corpus))
    }

    /// The salient term set of the corpus
    ///
    /// Ties at the cut-off are resolved by first occurrence.
    pub fn salient_terms(&self, corpus: &str) -> SalientTerms {
        let table = self.frequencies(corpus);
        let salient = table.salient_terms();
        debug!(
            "Ranked {} distinct terms ({} tokens), kept {}",
            table.len(),
            table.total(),
            salient.len()
        );
        salient
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stopwords::StopwordFilter;
    use newsbrief_domain::SALIENT_TERM_LIMIT;

    fn ranker() -> FrequencyRanker {
        FrequencyRanker::new(Tokenizer::new(StopwordFilter::from_list(&["the", "a", "for"])))
    }

    #[test]
    fn test_frequencies_over_corpus() {
        let table = ranker().frequencies("The Celtics won. The Celtics celebrated a win for Boston.");
        assert_eq!(table.count("celtics"), 2);
        assert_eq!(table.count("boston"), 1);
        assert_eq!(table.count("the"), 0);
    }

    #[test]
    fn test_salient_terms_top_fifty() {
        let mut corpus = String::new();
        for i in 0..60 {
            // word{i} appears 60 - i times
            for _ in 0..(60 - i) {
                corpus.push_str(&format!("word{} ", i));
            }
        }
        let salient = ranker().salient_terms(&corpus);
        assert_eq!(salient.len(), SALIENT_TERM_LIMIT);
        assert!(salient.contains("word0"));
        assert!(salient.contains("word49"));
        assert!(!salient.contains("word50"));
    }

    #[test]
    fn test_empty_corpus_has_no_terms() {
        assert!(ranker().salient_terms("").is_empty());
        assert!(ranker().salient_terms("the a for .").is_empty());
    }
}
