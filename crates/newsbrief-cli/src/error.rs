//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// NLP asset error
    #[error("NLP error: {0}")]
    Nlp(#[from] newsbrief_nlp::NlpError),

    /// Fetch setup error
    #[error("Fetch error: {0}")]
    Fetch(#[from] newsbrief_fetch::FetchError),
}
