//! Command implementations.

pub mod setup;
pub mod topic;
pub mod url;

pub use self::setup::execute_setup;
pub use self::topic::{execute_topic, summarize_topic};
pub use self::url::{execute_url, summarize_url};

use crate::config::AppConfig;
use crate::error::Result;
use newsbrief_fetch::{ArticleCollector, HttpPageSource};
use newsbrief_nlp::NlpToolkit;
use tracing::{debug, warn};

/// Install and load the NLP assets, falling back to the embedded copies.
///
/// A summarizing run never fails because the data directory is unusable.
pub fn load_toolkit(config: &AppConfig) -> NlpToolkit {
    let Some(dir) = config.nlp_data_dir() else {
        debug!("No NLP data directory; using embedded assets");
        return NlpToolkit::embedded();
    };

    match NlpToolkit::initialize(&dir) {
        Ok((toolkit, _report)) => toolkit,
        Err(e) => {
            warn!("{}; using embedded assets", e);
            NlpToolkit::embedded()
        }
    }
}

/// Build a collector over the live HTTP source.
pub fn http_collector(config: &AppConfig) -> Result<ArticleCollector<HttpPageSource>> {
    let source = HttpPageSource::new(&config.fetch)?;
    Ok(ArticleCollector::new(source, config.feed.clone()))
}
