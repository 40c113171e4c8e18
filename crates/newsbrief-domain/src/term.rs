//! Term module - normalized tokens and their frequencies

use std::collections::HashMap;
use std::fmt;

/// Maximum number of terms in the salient term set
pub const SALIENT_TERM_LIMIT: usize = 50;

/// A normalized word unit: lowercase and purely alphanumeric
///
/// Stopword removal happens in the tokenizer; a `Token` only guarantees the
/// character-level normalization.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Token(String);

impl Token {
    /// Normalize a raw word into a token
    ///
    /// Returns `None` if the word is empty or contains any character that is
    /// not alphanumeric (punctuation, apostrophes, hyphens, symbols).
    ///
    /// # Examples
    ///
    /// ```
    /// use newsbrief_domain::Token;
    ///
    /// assert_eq!(Token::normalize("Celtics").unwrap().as_str(), "celtics");
    /// assert!(Token::normalize("n't").is_none());
    /// assert!(Token::normalize(".").is_none());
    /// ```
    pub fn normalize(raw: &str) -> Option<Self> {
        if raw.is_empty() || !raw.chars().all(char::is_alphanumeric) {
            return None;
        }
        Some(Self(raw.to_lowercase()))
    }

    /// The token text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Occurrence counts of tokens over a corpus
///
/// Distinct tokens are remembered in first-seen order. Ranking sorts stably
/// by descending count, so tokens with equal counts keep that order.
#[derive(Debug, Clone, Default)]
pub struct TermFrequencyTable {
    positions: HashMap<Token, usize>,
    entries: Vec<(Token, usize)>,
    total: usize,
}

impl TermFrequencyTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table by counting every token in the sequence
    pub fn from_tokens<I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = Token>,
    {
        let mut table = Self::new();
        for token in tokens {
            table.add(token);
        }
        table
    }

    /// Count one occurrence of a token
    pub fn add(&mut self, token: Token) {
        self.total += 1;
        match self.positions.get(&token) {
            Some(&pos) => self.entries[pos].1 += 1,
            None => {
                self.positions.insert(token.clone(), self.entries.len());
                self.entries.push((token, 1));
            }
        }
    }

    /// Occurrence count of a term (0 if never seen)
    pub fn count(&self, term: &str) -> usize {
        self.entries
            .iter()
            .find(|(token, _)| token.as_str() == term)
            .map_or(0, |(_, count)| *count)
    }

    /// Number of distinct tokens
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no token was counted
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of counted occurrences
    pub fn total(&self) -> usize {
        self.total
    }

    /// The `k` most frequent tokens with their counts, most frequent first
    ///
    /// # Examples
    ///
    /// ```
    /// use newsbrief_domain::{TermFrequencyTable, Token};
    ///
    /// let tokens = ["celtics", "win", "celtics", "boston", "win", "celtics"]
    ///     .iter()
    ///     .filter_map(|w| Token::normalize(w));
    /// let table = TermFrequencyTable::from_tokens(tokens);
    ///
    /// let top: Vec<_> = table
    ///     .most_common(2)
    ///     .into_iter()
    ///     .map(|(t, c)| (t.as_str().to_string(), c))
    ///     .collect();
    /// assert_eq!(top, vec![("celtics".to_string(), 3), ("win".to_string(), 2)]);
    /// ```
    pub fn most_common(&self, k: usize) -> Vec<(&Token, usize)> {
        let mut ranked: Vec<(&Token, usize)> = self
            .entries
            .iter()
            .map(|(token, count)| (token, *count))
            .collect();
        // sort_by is stable: equal counts stay in first-seen order
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(k);
        ranked
    }

    /// The salient term set: the top [`SALIENT_TERM_LIMIT`] tokens
    pub fn salient_terms(&self) -> SalientTerms {
        SalientTerms {
            terms: self
                .most_common(SALIENT_TERM_LIMIT)
                .into_iter()
                .map(|(token, _)| token.clone())
                .collect(),
        }
    }
}

/// The most frequent terms of a corpus, used for membership tests only
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SalientTerms {
    terms: Vec<Token>,
}

impl SalientTerms {
    /// Build a salient set directly from terms, keeping at most
    /// [`SALIENT_TERM_LIMIT`] distinct entries
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out: Vec<Token> = Vec::new();
        for term in terms {
            if out.len() == SALIENT_TERM_LIMIT {
                break;
            }
            if let Some(token) = Token::normalize(term.as_ref()) {
                if !out.contains(&token) {
                    out.push(token);
                }
            }
        }
        Self { terms: out }
    }

    /// True if the set contains the term
    pub fn contains(&self, term: &str) -> bool {
        self.terms.iter().any(|t| t.as_str() == term)
    }

    /// First salient term occurring as a literal substring of `text`
    ///
    /// The match is case-sensitive and not word-bounded: terms are lowercase,
    /// so `"boston"` does not match `"Boston"`, while `"win"` matches
    /// `"winning"`.
    pub fn find_in(&self, text: &str) -> Option<&Token> {
        self.terms.iter().find(|term| text.contains(term.as_str()))
    }

    /// Number of terms in the set
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// True if the set is empty
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Iterate over the terms
    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.terms.iter()
    }
}
