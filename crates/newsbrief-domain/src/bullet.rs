//! Bullet module - the report a run produces

use crate::sentence::Sentence;
use std::fmt;

/// Marker placed before every bullet item
pub const BULLET_MARKER: &str = "- ";

/// Maximum number of bullet items in a report
pub const MAX_BULLET_ITEMS: usize = 10;

/// A selected sentence, trimmed, ready to be printed after the marker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulletItem {
    /// Position of the source sentence in the corpus
    pub sentence_index: usize,

    /// Trimmed sentence text
    pub text: String,
}

impl BulletItem {
    /// Create a bullet item from a sentence
    ///
    /// # Examples
    ///
    /// ```
    /// use newsbrief_domain::{BulletItem, Sentence};
    ///
    /// let item = BulletItem::from_sentence(&Sentence::new(0, "  Alice met Bob. "));
    /// assert_eq!(item.to_string(), "- Alice met Bob.");
    /// ```
    pub fn from_sentence(sentence: &Sentence) -> Self {
        Self {
            sentence_index: sentence.index,
            text: sentence.trimmed().to_string(),
        }
    }
}

impl fmt::Display for BulletItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", BULLET_MARKER, self.text)
    }
}

/// Ordered bullet items of one run, capped at [`MAX_BULLET_ITEMS`]
///
/// Renders as the items joined by newlines. An empty report renders as the
/// empty string, which is a valid "no summary produced" outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulletReport {
    items: Vec<BulletItem>,
}

impl BulletReport {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item
    ///
    /// Returns `false` and drops the item if the report is already full.
    pub fn push(&mut self, item: BulletItem) -> bool {
        if self.is_full() {
            return false;
        }
        self.items.push(item);
        true
    }

    /// True once [`MAX_BULLET_ITEMS`] items have been collected
    pub fn is_full(&self) -> bool {
        self.items.len() >= MAX_BULLET_ITEMS
    }

    /// The collected items in document order
    pub fn items(&self) -> &[BulletItem] {
        &self.items
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if no sentence qualified
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl fmt::Display for BulletReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, item) in self.items.iter().enumerate() {
            if idx > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}", item)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report_renders_empty_string() {
        assert_eq!(BulletReport::new().to_string(), "");
    }

    #[test]
    fn test_report_joins_with_newlines() {
        let mut report = BulletReport::new();
        report.push(BulletItem::from_sentence(&Sentence::new(0, "One.")));
        report.push(BulletItem::from_sentence(&Sentence::new(3, "Two. ")));
        assert_eq!(report.to_string(), "- One.\n- Two.");
    }

    #[test]
    fn test_report_refuses_items_past_cap() {
        let mut report = BulletReport::new();
        for i in 0..MAX_BULLET_ITEMS {
            assert!(report.push(BulletItem::from_sentence(&Sentence::new(i, "S."))));
        }
        assert!(report.is_full());
        assert!(!report.push(BulletItem::from_sentence(&Sentence::new(99, "Late."))));
        assert_eq!(report.len(), MAX_BULLET_ITEMS);
        assert_eq!(report.to_string().lines().count(), MAX_BULLET_ITEMS);
    }
}
