//! Word tokenization and normalization
//!
//! Words are found with Unicode word boundaries (UAX #29), which already
//! separates punctuation from words. English contractions are then split the
//! way Treebank-style tokenizers do it: `don't` becomes `do` + `n't` and
//! `Boston's` becomes `Boston` + `'s`.

use crate::stopwords::StopwordFilter;
use newsbrief_domain::Token;
use unicode_segmentation::UnicodeSegmentation;

/// Contraction suffixes split off a word, checked in order
const CONTRACTION_SUFFIXES: &[&str] = &[
    "n't", "'s", "'re", "'ve", "'ll", "'d", "'m",
    "n\u{2019}t", "\u{2019}s", "\u{2019}re", "\u{2019}ve", "\u{2019}ll", "\u{2019}d", "\u{2019}m",
];

/// Split text into word and punctuation tokens, preserving case
///
/// Whitespace is dropped. Every other character ends up in exactly one
/// token.
///
/// # Examples
///
/// ```
/// use newsbrief_nlp::word_tokenize;
///
/// assert_eq!(
///     word_tokenize("Brown didn't miss, again."),
///     vec!["Brown", "did", "n't", "miss", ",", "again", "."]
/// );
/// ```
pub fn word_tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    for segment in text.split_word_bounds() {
        if segment.chars().all(char::is_whitespace) {
            continue;
        }
        let (head, tail) = split_contraction(segment);
        tokens.push(head.to_string());
        if let Some(tail) = tail {
            tokens.push(tail.to_string());
        }
    }
    tokens
}

fn split_contraction(word: &str) -> (&str, Option<&str>) {
    for suffix in CONTRACTION_SUFFIXES {
        if word.len() <= suffix.len() {
            continue;
        }
        let cut = word.len() - suffix.len();
        if word.is_char_boundary(cut) && word[cut..].eq_ignore_ascii_case(suffix) {
            return (&word[..cut], Some(&word[cut..]));
        }
    }
    (word, None)
}

/// Turns text into the normalized tokens used for frequency counting
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    stopwords: StopwordFilter,
}

impl Tokenizer {
    /// Create a tokenizer with the given stopword filter
    pub fn new(stopwords: StopwordFilter) -> Self {
        Self { stopwords }
    }

    /// Lower-case, tokenize, keep alphanumeric non-stopword tokens
    ///
    /// Order and duplicates are preserved.
    pub fn normalize(&self, text: &str) -> Vec<Token> {
        word_tokenize(&text.to_lowercase())
            .iter()
            .filter_map(|word| Token::normalize(word))
            .filter(|token| !self.stopwords.is_stopword(token.as_str()))
            .collect()
    }

    /// The stopword filter in use
    pub fn stopwords(&self) -> &StopwordFilter {
        &self.stopwords
    }
}
