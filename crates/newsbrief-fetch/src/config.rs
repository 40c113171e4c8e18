//! Configuration for fetching articles and search feeds

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default request timeout (20 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 20;

/// Default maximum number of redirects to follow
pub const DEFAULT_MAX_REDIRECTS: usize = 10;

/// Default search feed endpoint
pub const DEFAULT_FEED_ENDPOINT: &str = "https://news.google.com/rss/search";

/// HTTP client settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum redirects followed per request
    #[serde(default = "default_max_redirects")]
    pub max_redirects: usize,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl FetchConfig {
    /// Get the request timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }
        if self.user_agent.trim().is_empty() {
            return Err("user_agent must not be empty".to_string());
        }
        Ok(())
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_redirects: DEFAULT_MAX_REDIRECTS,
            user_agent: default_user_agent(),
        }
    }
}

/// Search feed endpoint and locale
///
/// The locale defaults to Australian English, matching the feed the tool
/// was first written against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedConfig {
    /// RSS search endpoint, without query string
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Interface language (`hl`)
    #[serde(default = "default_language")]
    pub language: String,

    /// Region (`gl`)
    #[serde(default = "default_region")]
    pub region: String,

    /// Edition / channel id (`ceid`)
    #[serde(default = "default_channel_id")]
    pub channel_id: String,
}

impl FeedConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if url::Url::parse(&self.endpoint).is_err() {
            return Err(format!("endpoint '{}' is not a valid URL", self.endpoint));
        }
        for (name, value) in [
            ("language", &self.language),
            ("region", &self.region),
            ("channel_id", &self.channel_id),
        ] {
            if value.trim().is_empty() {
                return Err(format!("{} must not be empty", name));
            }
        }
        Ok(())
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            language: default_language(),
            region: default_region(),
            channel_id: default_channel_id(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_max_redirects() -> usize {
    DEFAULT_MAX_REDIRECTS
}

fn default_user_agent() -> String {
    format!(
        "newsbrief/{} (rust; {})",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS
    )
}

fn default_endpoint() -> String {
    DEFAULT_FEED_ENDPOINT.to_string()
}

fn default_language() -> String {
    "en-AU".to_string()
}

fn default_region() -> String {
    "AU".to_string()
}

fn default_channel_id() -> String {
    "AU:en".to_string()
}
