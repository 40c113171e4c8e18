//! Stopword filtering
//!
//! English stopwords come from the `stop-words` crate. The list is written to
//! the asset directory during setup so it can be edited, and read back from
//! there on every run.

use std::collections::HashSet;
use stop_words::{get, LANGUAGE};

/// The default English stopword list, lowercase
pub fn english_stopwords() -> Vec<String> {
    get(LANGUAGE::English).iter().map(|s| s.to_string()).collect()
}

/// A filter for removing stopwords from token streams
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    /// Set of stopwords (lowercase)
    stopwords: HashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::english()
    }
}

impl StopwordFilter {
    /// Filter with the default English list
    pub fn english() -> Self {
        Self::from_set(english_stopwords().into_iter().collect())
    }

    /// Filter from an already-loaded set of words
    pub fn from_set(words: HashSet<String>) -> Self {
        Self {
            stopwords: words.into_iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Filter from a custom list
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            stopwords: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Filter that removes nothing
    pub fn empty() -> Self {
        Self {
            stopwords: HashSet::new(),
        }
    }

    /// Check if a word is a stopword (case-insensitive)
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word) || self.stopwords.contains(&word.to_lowercase())
    }

    /// Number of stopwords in the filter
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// True if the filter removes nothing
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}
