//! Corpus module - the text a run summarizes

/// Concatenated article text for one run
///
/// Articles are appended in the order their links were given, each preceded
/// by a single space. Source URLs are kept for logging only; nothing
/// downstream attributes sentences back to an article.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    text: String,
    sources: Vec<String>,
}

impl Corpus {
    /// Create an empty corpus
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a corpus from a single block of text with no recorded source
    ///
    /// # Examples
    ///
    /// ```
    /// use newsbrief_domain::Corpus;
    ///
    /// let corpus = Corpus::from_text("Alice met Bob.");
    /// assert_eq!(corpus.text(), "Alice met Bob.");
    /// assert!(corpus.sources().is_empty());
    /// ```
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sources: Vec::new(),
        }
    }

    /// Append one article's text
    ///
    /// Empty article text (a failed fetch) still records the source so the
    /// append order stays aligned with the link order.
    ///
    /// # Examples
    ///
    /// ```
    /// use newsbrief_domain::Corpus;
    ///
    /// let mut corpus = Corpus::new();
    /// corpus.push_article("https://a.example", "First.");
    /// corpus.push_article("https://b.example", "Second.");
    /// assert_eq!(corpus.text(), " First. Second.");
    /// assert_eq!(corpus.sources().len(), 2);
    /// ```
    pub fn push_article(&mut self, source: impl Into<String>, article_text: &str) {
        self.text.push(' ');
        self.text.push_str(article_text);
        self.sources.push(source.into());
    }

    /// The full corpus text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// URLs the corpus was built from, in append order
    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    /// True if the corpus holds no visible characters
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Length of the corpus text in bytes
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// True if the corpus text is empty
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_corpus_is_blank() {
        let corpus = Corpus::new();
        assert!(corpus.is_blank());
        assert!(corpus.is_empty());
    }

    #[test]
    fn test_failed_articles_keep_order() {
        let mut corpus = Corpus::new();
        corpus.push_article("https://a.example", "Alpha.");
        corpus.push_article("https://b.example", "");
        corpus.push_article("https://c.example", "Gamma.");

        assert_eq!(corpus.text(), " Alpha.  Gamma.");
        assert_eq!(
            corpus.sources(),
            &["https://a.example", "https://b.example", "https://c.example"]
        );
    }

    #[test]
    fn test_only_failed_articles_is_blank() {
        let mut corpus = Corpus::new();
        corpus.push_article("https://a.example", "");
        corpus.push_article("https://b.example", "");
        assert!(corpus.is_blank());
        assert!(!corpus.is_empty());
    }
}
