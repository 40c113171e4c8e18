//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use newsbrief_fetch::{FeedConfig, FetchConfig};
use newsbrief_nlp::NlpConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the per-user application directory under `$HOME`.
pub const APP_DIR_NAME: &str = ".newsbrief";

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP client settings
    #[serde(default)]
    pub fetch: FetchConfig,

    /// Search feed endpoint and locale
    #[serde(default)]
    pub feed: FeedConfig,

    /// NLP asset location
    #[serde(default)]
    pub nlp: NlpConfig,
}

impl AppConfig {
    /// The per-user application directory (`~/.newsbrief`).
    pub fn app_home() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(APP_DIR_NAME))
    }

    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = Self::app_home()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join("config.toml"))
    }

    /// Load configuration.
    ///
    /// With no explicit path, a missing default file yields the defaults. An
    /// explicit path must exist.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(CliError::Config(format!(
                        "Config file '{}' not found",
                        path.display()
                    )));
                }
                Self::load_from(path)
            }
            None => match Self::path() {
                Ok(path) if path.exists() => Self::load_from(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Load and validate configuration from a file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config = Self::from_toml(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Serialize configuration to TOML text.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Validate every section.
    pub fn validate(&self) -> Result<()> {
        self.fetch
            .validate()
            .map_err(|e| CliError::Config(format!("[fetch] {}", e)))?;
        self.feed
            .validate()
            .map_err(|e| CliError::Config(format!("[feed] {}", e)))?;
        self.nlp
            .validate()
            .map_err(|e| CliError::Config(format!("[nlp] {}", e)))?;
        Ok(())
    }

    /// Directory the NLP assets live in, if one can be determined.
    pub fn nlp_data_dir(&self) -> Option<PathBuf> {
        self.nlp.resolve_data_dir(Self::app_home())
    }
}
