//! Configuration for the NLP layer

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Name of the asset directory created under the application home
pub const DATA_DIR_NAME: &str = "nlp_data";

/// Configuration for NLP asset handling
///
/// Summarization limits (top terms, bullet count) are fixed constants in
/// `newsbrief-domain`; only the asset location is configurable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NlpConfig {
    /// Directory holding the installed asset files
    ///
    /// `None` means "use the default location", resolved by the caller.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    /// Skip the asset directory entirely and use the embedded defaults
    #[serde(default)]
    pub embedded_only: bool,
}

impl NlpConfig {
    /// Resolve the asset directory, falling back to `<app_home>/nlp_data`
    ///
    /// Returns `None` when embedded assets are requested or no location is
    /// known.
    pub fn resolve_data_dir(&self, app_home: Option<PathBuf>) -> Option<PathBuf> {
        if self.embedded_only {
            return None;
        }
        self.data_dir
            .clone()
            .or_else(|| app_home.map(|home| home.join(DATA_DIR_NAME)))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if let Some(dir) = &self.data_dir {
            if dir.as_os_str().is_empty() {
                return Err("data_dir must not be empty".to_string());
            }
        }
        Ok(())
    }
}
