//! Trait definitions for pluggable capabilities
//!
//! The named-entity check is the one piece of the pipeline that depends on a
//! language model of some kind. It is expressed as a trait so that a
//! heuristic tagger, a statistical toolkit or a test double can be swapped in.

/// Decides whether a sentence mentions a named entity
///
/// Implemented by the NLP layer (newsbrief-nlp). Implementations must return
/// `false` rather than fail on degenerate input such as an empty sentence.
pub trait EntityClassifier {
    /// True if the sentence contains at least one named entity
    fn classify(&self, sentence: &str) -> bool;
}

impl<F> EntityClassifier for F
where
    F: Fn(&str) -> bool,
{
    fn classify(&self, sentence: &str) -> bool {
        self(sentence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run<C: EntityClassifier>(classifier: C, sentence: &str) -> bool {
        classifier.classify(sentence)
    }

    #[test]
    fn test_closure_classifier() {
        let has_capital = |s: &str| s.split_whitespace().skip(1).any(|w| w.starts_with(char::is_uppercase));
        assert!(run(has_capital, "We met Alice."));
        assert!(!run(has_capital, "We met nobody."));
    }

    #[test]
    fn test_borrowed_closure_classifier() {
        let always = |_: &str| true;
        assert!(run(&always, ""));
    }
}
