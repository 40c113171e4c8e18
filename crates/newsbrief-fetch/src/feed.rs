//! Search feed URLs and entry link extraction

use crate::config::FeedConfig;
use crate::error::FetchError;
use feed_rs::model::Entry;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::Url;

/// Characters left as-is in the topic: alphanumerics plus `_.-~/`
const TOPIC_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~')
    .remove(b'/');

/// Locale parameters also keep `:` (`ceid=AU:en`)
const PARAM_SET: &AsciiSet = &TOPIC_SET.remove(b':');

/// Build the search feed URL for `topic`
///
/// The topic is percent-encoded, so spaces become `%20` and `+` becomes `%2B`.
pub fn search_url(config: &FeedConfig, topic: &str, count: usize) -> Result<Url, FetchError> {
    let mut url = Url::parse(&config.endpoint).map_err(|e| FetchError::InvalidUrl {
        url: config.endpoint.clone(),
        reason: e.to_string(),
    })?;

    let query = format!(
        "q={}&hl={}&gl={}&ceid={}&num={}",
        utf8_percent_encode(topic, TOPIC_SET),
        utf8_percent_encode(&config.language, PARAM_SET),
        utf8_percent_encode(&config.region, PARAM_SET),
        utf8_percent_encode(&config.channel_id, PARAM_SET),
        count
    );
    url.set_query(Some(&query));

    Ok(url)
}

/// Parse an RSS or Atom body and return up to `limit` entry links in feed order
pub fn parse_entry_links(body: &[u8], limit: usize) -> Result<Vec<String>, FetchError> {
    let feed = feed_rs::parser::parse(body)?;

    Ok(feed
        .entries
        .iter()
        .filter_map(entry_link)
        .take(limit)
        .collect())
}

// Prefer rel="alternate"; otherwise the first link the entry has.
fn entry_link(entry: &Entry) -> Option<String> {
    entry
        .links
        .iter()
        .find(|link| link.rel.as_deref() == Some("alternate"))
        .or_else(|| entry.links.first())
        .map(|link| link.href.clone())
}
