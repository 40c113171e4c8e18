//! Article collection: links in, corpus out

use crate::config::FeedConfig;
use crate::feed::{parse_entry_links, search_url};
use crate::html::extract_paragraph_text;
use crate::source::PageSource;
use newsbrief_domain::Corpus;
use tracing::{debug, info, warn};

/// Fetches articles one at a time and assembles them into a corpus
///
/// Failures never escape: a page that cannot be fetched contributes empty
/// text, and a feed that cannot be fetched or parsed yields no links.
#[derive(Debug, Clone)]
pub struct ArticleCollector<S> {
    source: S,
    feed: FeedConfig,
}

impl<S: PageSource> ArticleCollector<S> {
    /// Create a collector over `source`, searching with `feed`
    pub fn new(source: S, feed: FeedConfig) -> Self {
        Self { source, feed }
    }

    /// The underlying page source
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch one page and return its paragraph text
    pub async fn article_text(&self, url: &str) -> String {
        info!("Fetching: {}", url);

        match self.source.fetch_text(url).await {
            Ok(html) => {
                let text = extract_paragraph_text(&html);
                if text.is_empty() {
                    debug!("No paragraph text at {}", url);
                }
                text
            }
            Err(e) => {
                warn!("Failed to fetch {}: {}", url, e);
                String::new()
            }
        }
    }

    /// Fetch every link in order and concatenate the article texts
    pub async fn collect(&self, links: &[String]) -> Corpus {
        let mut corpus = Corpus::new();
        for link in links {
            let text = self.article_text(link).await;
            corpus.push_article(link.clone(), &text);
        }
        debug!(
            "Collected {} articles ({} bytes)",
            corpus.sources().len(),
            corpus.len()
        );
        corpus
    }

    /// Look up the first `count` article links for `topic`
    pub async fn search_links(&self, topic: &str, count: usize) -> Vec<String> {
        if count == 0 {
            return Vec::new();
        }

        let url = match search_url(&self.feed, topic, count) {
            Ok(url) => url,
            Err(e) => {
                warn!("Cannot build search URL for '{}': {}", topic, e);
                return Vec::new();
            }
        };

        info!("Fetching: {}", url);
        let body = match self.source.fetch_text(url.as_str()).await {
            Ok(body) => body,
            Err(e) => {
                warn!("Failed to fetch {}: {}", url, e);
                return Vec::new();
            }
        };

        match parse_entry_links(body.as_bytes(), count) {
            Ok(links) => {
                debug!("Feed returned {} links for '{}'", links.len(), topic);
                links
            }
            Err(e) => {
                warn!("Failed to parse feed {}: {}", url, e);
                Vec::new()
            }
        }
    }

    /// Search for `topic` and collect the linked articles
    pub async fn collect_topic(&self, topic: &str, count: usize) -> Corpus {
        let links = self.search_links(topic, count).await;
        self.collect(&links).await
    }

    /// Collect a single article
    pub async fn collect_url(&self, url: &str) -> Corpus {
        self.collect(&[url.to_string()]).await
    }
}
