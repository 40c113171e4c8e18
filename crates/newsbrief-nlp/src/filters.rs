//! Boilerplate exclusion patterns

use regex::Regex;

/// Why a sentence was excluded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exclusion {
    /// Promotional "read more" link text
    ReadMore,
    /// A raw URL
    Url,
}

/// Matches sentences that are navigation or promotion rather than content
#[derive(Debug, Clone)]
pub struct ExclusionFilter {
    read_more: Regex,
    url: Regex,
}

impl ExclusionFilter {
    /// Compile the exclusion patterns
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            read_more: Regex::new(r"(?i)read more")?,
            url: Regex::new(r"http\S+")?,
        })
    }

    /// The first exclusion that applies to a sentence, if any
    pub fn check(&self, sentence: &str) -> Option<Exclusion> {
        if self.read_more.is_match(sentence) {
            Some(Exclusion::ReadMore)
        } else if self.url.is_match(sentence) {
            Some(Exclusion::Url)
        } else {
            None
        }
    }

    /// True if the sentence must not appear in a report
    pub fn is_excluded(&self, sentence: &str) -> bool {
        self.check(sentence).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_more_any_case() {
        let filter = ExclusionFilter::new().unwrap();
        assert_eq!(filter.check("READ MORE: Celtics win"), Some(Exclusion::ReadMore));
        assert_eq!(filter.check("Tap to read more from Reuters."), Some(Exclusion::ReadMore));
        assert_eq!(filter.check("They spread more cheer."), Some(Exclusion::ReadMore));
    }

    #[test]
    fn test_urls() {
        let filter = ExclusionFilter::new().unwrap();
        assert_eq!(filter.check("See https://example.com for details."), Some(Exclusion::Url));
        assert_eq!(filter.check("Visit http://x.io"), Some(Exclusion::Url));
        assert_eq!(filter.check("The word http alone."), None);
    }

    #[test]
    fn test_clean_sentence_passes() {
        let filter = ExclusionFilter::new().unwrap();
        assert!(!filter.is_excluded("The Boston Celtics won the championship."));
        assert!(!filter.is_excluded("Read the full story later."));
    }
}
