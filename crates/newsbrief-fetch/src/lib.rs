//! Article and feed fetching for newsbrief
//!
//! This crate turns URLs into text:
//! - [`PageSource`] abstracts where bodies come from ([`HttpPageSource`] for
//!   the network, [`MockPageSource`] for tests)
//! - [`extract_paragraph_text`] pulls `<p>` text out of article HTML
//! - [`search_url`] and [`parse_entry_links`] handle the RSS search feed
//! - [`ArticleCollector`] fetches articles sequentially into a
//!   [`Corpus`](newsbrief_domain::Corpus)
//!
//! Fetch failures are logged and degrade to empty text; nothing in the
//! collector returns an error.

#![warn(missing_docs)]

mod collector;
mod config;
mod error;
mod feed;
mod html;
mod source;

pub use collector::ArticleCollector;
pub use config::{
    FeedConfig, FetchConfig, DEFAULT_FEED_ENDPOINT, DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT_SECS,
};
pub use error::FetchError;
pub use feed::{parse_entry_links, search_url};
pub use html::extract_paragraph_text;
pub use source::{HttpPageSource, MockPageSource, PageSource};
