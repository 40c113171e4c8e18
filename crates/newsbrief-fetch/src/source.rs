//! Page sources: where article and feed bodies come from

use crate::config::FetchConfig;
use crate::error::FetchError;
use reqwest::redirect::Policy;
use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::debug;
use url::Url;

/// Anything that can turn a URL into a response body
pub trait PageSource {
    /// Fetch the body at `url` as text
    fn fetch_text(&self, url: &str) -> impl Future<Output = Result<String, FetchError>> + Send;
}

/// Live HTTP source backed by reqwest
#[derive(Debug, Clone)]
pub struct HttpPageSource {
    client: reqwest::Client,
}

impl HttpPageSource {
    /// Build a client with the configured timeout, redirect limit and user agent
    pub fn new(config: &FetchConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout())
            .redirect(Policy::limited(config.max_redirects))
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(Self { client })
    }
}

impl PageSource for HttpPageSource {
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        let parsed = Url::parse(url).map_err(|e| FetchError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        let response = self.client.get(parsed).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        debug!("Fetched {} bytes from {}", body.len(), url);
        Ok(body)
    }
}

#[derive(Debug, Clone)]
enum MockResponse {
    Body(String),
    Status(u16),
}

/// In-memory source for tests and offline runs
///
/// Unknown URLs fail with a connection error. Every request is recorded so
/// callers can assert on what was fetched and in what order.
#[derive(Debug, Clone, Default)]
pub struct MockPageSource {
    responses: Arc<Mutex<HashMap<String, MockResponse>>>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockPageSource {
    /// Create a source with no pages
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` for `url`
    pub fn add_page(&self, url: impl Into<String>, body: impl Into<String>) {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(url.into(), MockResponse::Body(body.into()));
    }

    /// Answer `url` with an HTTP error status
    pub fn add_status(&self, url: impl Into<String>, status: u16) {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(url.into(), MockResponse::Status(status));
    }

    /// URLs requested so far, in order
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of requests made so far
    pub fn request_count(&self) -> usize {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl PageSource for MockPageSource {
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(url.to_string());

        let response = self
            .responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(url)
            .cloned();

        match response {
            Some(MockResponse::Body(body)) => Ok(body),
            Some(MockResponse::Status(code)) => Err(FetchError::Status(code)),
            None => Err(FetchError::Connection(format!("no route to {}", url))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_source_builds_from_defaults() {
        assert!(HttpPageSource::new(&FetchConfig::default()).is_ok());
    }

    #[tokio::test]
    async fn test_http_source_rejects_invalid_url() {
        let source = HttpPageSource::new(&FetchConfig::default()).unwrap();
        let result = source.fetch_text("not a url").await;
        assert!(matches!(result, Err(FetchError::InvalidUrl { .. })));
    }

    #[tokio::test]
    async fn test_mock_source_serves_and_records() {
        let source = MockPageSource::new();
        source.add_page("https://a.example/1", "<p>one</p>");
        source.add_status("https://a.example/2", 503);

        assert_eq!(
            source.fetch_text("https://a.example/1").await.unwrap(),
            "<p>one</p>"
        );
        assert!(matches!(
            source.fetch_text("https://a.example/2").await,
            Err(FetchError::Status(503))
        ));
        assert!(matches!(
            source.fetch_text("https://a.example/3").await,
            Err(FetchError::Connection(_))
        ));

        assert_eq!(
            source.requests(),
            vec![
                "https://a.example/1",
                "https://a.example/2",
                "https://a.example/3"
            ]
        );
    }

    #[tokio::test]
    async fn test_mock_clones_share_state() {
        let source = MockPageSource::new();
        let handle = source.clone();
        source.add_page("https://a.example/", "body");

        handle.fetch_text("https://a.example/").await.unwrap();
        assert_eq!(source.request_count(), 1);
    }
}
