//! Error types for the NLP layer

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while installing or loading NLP assets
#[derive(Error, Debug)]
pub enum NlpError {
    /// Filesystem error on an asset path
    #[error("Asset I/O error at {path}: {source}")]
    Io {
        /// Path that failed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Asset file exists but holds no usable entries
    #[error("Asset '{0}' is empty")]
    EmptyAsset(String),

    /// Exclusion pattern failed to compile
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),
}

impl NlpError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        NlpError::Io {
            path: path.into(),
            source,
        }
    }
}
