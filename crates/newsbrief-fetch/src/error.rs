//! Error types for fetching

use thiserror::Error;

/// Errors that can occur while fetching pages or feeds
///
/// None of these abort a run: the collector logs them and carries on with
/// empty text or an empty link list.
#[derive(Error, Debug)]
pub enum FetchError {
    /// URL could not be parsed
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl {
        /// The offending input
        url: String,
        /// Parser message
        reason: String,
    },

    /// Request exceeded the configured timeout
    #[error("Request timed out")]
    Timeout,

    /// Server answered with a non-success status
    #[error("Request failed with status {0}")]
    Status(u16),

    /// Network-level failure (DNS, refused connection, TLS, ...)
    #[error("Connection error: {0}")]
    Connection(String),

    /// Any other HTTP failure, including body decoding
    #[error("HTTP error: {0}")]
    Http(String),

    /// Feed body could not be parsed as RSS or Atom
    #[error("Feed parse error: {0}")]
    FeedParse(String),

    /// HTTP client could not be built
    #[error("Client error: {0}")]
    Client(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FetchError::Timeout
        } else if e.is_connect() {
            FetchError::Connection(e.to_string())
        } else if let Some(status) = e.status() {
            FetchError::Status(status.as_u16())
        } else {
            FetchError::Http(e.to_string())
        }
    }
}

impl From<feed_rs::parser::ParseFeedError> for FetchError {
    fn from(e: feed_rs::parser::ParseFeedError) -> Self {
        FetchError::FeedParse(e.to_string())
    }
}
