//! Paragraph text extraction from article HTML

use scraper::{Html, Selector};

/// Concatenate the text of every `<p>` element, in document order
///
/// Paragraphs are joined with a single space. Empty paragraphs still
/// contribute their separator. Markup with no paragraphs yields an empty
/// string.
pub fn extract_paragraph_text(html: &str) -> String {
    let Ok(selector) = Selector::parse("p") else {
        return String::new();
    };

    let document = Html::parse_document(html);
    document
        .select(&selector)
        .map(|paragraph| paragraph.text().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}
