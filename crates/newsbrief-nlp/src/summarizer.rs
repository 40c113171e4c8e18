//! Bullet list generation
//!
//! ```text
//! corpus → sentences ─────────────┐
//!        → tokens → salient terms ├→ qualifying sentences (≤ 10) → report
//!        classifier ──────────────┘
//! ```

use crate::filters::ExclusionFilter;
use crate::ranker::FrequencyRanker;
use crate::segmenter::SentenceSegmenter;
use newsbrief_domain::{
    BulletItem, BulletReport, Corpus, EntityClassifier, SalientTerms, Sentence,
};
use tracing::{debug, info};

/// Selects the important sentences of a corpus
pub struct BulletGenerator<C> {
    segmenter: SentenceSegmenter,
    ranker: FrequencyRanker,
    filter: ExclusionFilter,
    classifier: C,
}

impl<C> BulletGenerator<C>
where
    C: EntityClassifier,
{
    /// Create a generator from its parts
    pub fn new(
        segmenter: SentenceSegmenter,
        ranker: FrequencyRanker,
        filter: ExclusionFilter,
        classifier: C,
    ) -> Self {
        Self {
            segmenter,
            ranker,
            filter,
            classifier,
        }
    }

    /// Summarize a corpus
    pub fn summarize(&self, corpus: &Corpus) -> BulletReport {
        info!(
            "Summarizing {} chars from {} source(s)",
            corpus.len(),
            corpus.sources().len()
        );
        self.generate(corpus.text())
    }

    /// Build the bullet report for raw corpus text
    ///
    /// Sentences are visited in document order and evaluation stops as soon
    /// as the report is full.
    pub fn generate(&self, text: &str) -> BulletReport {
        let sentences = self.segmenter.segment(text);
        let salient = self.ranker.salient_terms(text);

        let mut report = BulletReport::new();
        let mut evaluated = 0;
        for sentence in &sentences {
            evaluated += 1;
            if self.qualifies(sentence, &salient) {
                report.push(BulletItem::from_sentence(sentence));
                if report.is_full() {
                    break;
                }
            }
        }

        debug!(
            "Selected {} of {} sentences ({} evaluated)",
            report.len(),
            sentences.len(),
            evaluated
        );
        report
    }

    /// True if a sentence belongs in the report
    ///
    /// A sentence qualifies when a salient term occurs in it as a literal
    /// substring, it matches no exclusion pattern, and the classifier finds
    /// a named entity. The classifier runs last since it is the costly check.
    pub fn qualifies(&self, sentence: &Sentence, salient: &SalientTerms) -> bool {
        let Some(term) = salient.find_in(&sentence.text) else {
            return false;
        };
        if let Some(reason) = self.filter.check(&sentence.text) {
            debug!("Sentence {} excluded: {:?}", sentence.index, reason);
            return false;
        }
        let important = self.classifier.classify(&sentence.text);
        if important {
            debug!("Sentence {} selected on term '{}'", sentence.index, term);
        }
        important
    }
}
