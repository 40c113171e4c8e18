//! Sentence boundary detection
//!
//! Unicode sentence boundaries (UAX #29) do the heavy lifting. They break
//! after every period followed by a capitalized word, which is wrong after
//! titles and initials (`Mr. Smith`, `J. Smith`, `the U.S. Senate`), so
//! fragments ending in a known abbreviation are glued to the next fragment,
//! as are fragments ending in a single capital initial when a capitalized
//! word follows. A lone `I`, `V` or `X` after an ordinary word is read as a
//! Roman numeral and may end a sentence.

use newsbrief_domain::Sentence;
use std::collections::HashSet;
use unicode_segmentation::UnicodeSegmentation;

/// Splits text into sentences
#[derive(Debug, Clone, Default)]
pub struct SentenceSegmenter {
    abbreviations: HashSet<String>,
}

impl SentenceSegmenter {
    /// Create a segmenter that knows the given abbreviations
    ///
    /// Abbreviations are lowercase and written without their final period,
    /// e.g. `mr` or `u.s`.
    pub fn new(abbreviations: HashSet<String>) -> Self {
        Self { abbreviations }
    }

    /// Split text into trimmed, non-empty sentences in document order
    pub fn segment(&self, text: &str) -> Vec<Sentence> {
        let pieces: Vec<&str> = text.split_sentence_bounds().collect();
        let mut sentences = Vec::new();
        let mut pending = String::new();

        for (i, piece) in pieces.iter().enumerate() {
            pending.push_str(piece);
            if let Some(next) = pieces.get(i + 1) {
                if self.continues_into(&pending, next) {
                    continue;
                }
            }
            flush(&mut pending, &mut sentences);
        }
        flush(&mut pending, &mut sentences);

        sentences
    }

    /// True if the period ending `text` belongs to an abbreviation or an
    /// initial, so `next` is part of the same sentence
    fn continues_into(&self, text: &str, next: &str) -> bool {
        let Some((last, previous)) = trailing_words(text) else {
            return false;
        };

        if is_initial(last) {
            // "World War I." ends a sentence, "J. R. Smith" does not
            let numeral_after_word =
                ROMAN_NUMERALS.contains(&last) && !previous.is_some_and(is_initial);
            return !numeral_after_word && starts_uppercase(next);
        }
        !last.is_empty() && self.abbreviations.contains(&last.to_lowercase())
    }
}

const ROMAN_NUMERALS: &[&str] = &["I", "V", "X"];

/// The word before a trailing period, and the word before it without its
/// own period
fn trailing_words(text: &str) -> Option<(&str, Option<&str>)> {
    let body = text.trim_end().strip_suffix('.')?;
    let mut words = body.split_whitespace().rev();
    let last = words
        .next()?
        .trim_start_matches(|c: char| !c.is_alphanumeric());
    let previous = words.next().map(|word| word.trim_end_matches('.'));
    Some((last, previous))
}

fn is_initial(word: &str) -> bool {
    let mut chars = word.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_uppercase())
}

fn starts_uppercase(text: &str) -> bool {
    text.chars()
        .find(|c| c.is_alphanumeric())
        .is_some_and(char::is_uppercase)
}

fn flush(pending: &mut String, sentences: &mut Vec<Sentence>) {
    let trimmed = pending.trim();
    if !trimmed.is_empty() {
        sentences.push(Sentence::new(sentences.len(), trimmed));
    }
    pending.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segmenter() -> SentenceSegmenter {
        SentenceSegmenter::new(
            ["mr", "dr", "u.s", "jan"].iter().map(|s| s.to_string()).collect(),
        )
    }

    fn texts(sentences: &[Sentence]) -> Vec<&str> {
        sentences.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn test_basic_split() {
        let sentences = segmenter().segment("The Celtics won. It was historic! Was it? Yes.");
        assert_eq!(
            texts(&sentences),
            vec!["The Celtics won.", "It was historic!", "Was it?", "Yes."]
        );
        assert_eq!(sentences[2].index, 2);
    }

    #[test]
    fn test_abbreviations_do_not_split() {
        let sentences = segmenter().segment("Mr. Brown met Dr. Smith in the U.S. Senate. They talked.");
        assert_eq!(
            texts(&sentences),
            vec!["Mr. Brown met Dr. Smith in the U.S. Senate.", "They talked."]
        );
    }

    #[test]
    fn test_initials_do_not_split() {
        let sentences = segmenter().segment("J. R. Smith scored. Fans cheered.");
        assert_eq!(texts(&sentences), vec!["J. R. Smith scored.", "Fans cheered."]);
    }

    #[test]
    fn test_roman_numeral_ends_sentence() {
        let sentences = segmenter().segment("He served in World War I. Boston won the title.");
        assert_eq!(
            texts(&sentences),
            vec!["He served in World War I.", "Boston won the title."]
        );

        let sentences = segmenter().segment("Henry V. The play opened.");
        assert_eq!(texts(&sentences), vec!["Henry V.", "The play opened."]);
    }

    #[test]
    fn test_initial_before_name_does_not_split() {
        let sentences = segmenter().segment("George W. Bush spoke. Fans listened.");
        assert_eq!(texts(&sentences), vec!["George W. Bush spoke.", "Fans listened."]);

        let sentences = segmenter().segment("J. I. Packer wrote it. It sold.");
        assert_eq!(texts(&sentences), vec!["J. I. Packer wrote it.", "It sold."]);
    }

    #[test]
    fn test_url_period_does_not_split() {
        let sentences = segmenter().segment("Click here. READ MORE at https://example.com.");
        assert_eq!(
            texts(&sentences),
            vec!["Click here.", "READ MORE at https://example.com."]
        );
    }

    #[test]
    fn test_leading_space_and_blank_input() {
        assert!(segmenter().segment("").is_empty());
        assert!(segmenter().segment("   \n ").is_empty());
        assert_eq!(texts(&segmenter().segment("  One.  Two.")), vec!["One.", "Two."]);
    }

    #[test]
    fn test_trailing_abbreviation_is_flushed() {
        let sentences = segmenter().segment("He arrived on Jan.");
        assert_eq!(texts(&sentences), vec!["He arrived on Jan."]);
    }

    #[test]
    fn test_no_terminal_punctuation() {
        let sentences = segmenter().segment("a headline without a period");
        assert_eq!(texts(&sentences), vec!["a headline without a period"]);
    }
}
