//! Error types for the Wordforge dataset builder.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for Wordforge operations.
#[derive(Error, Debug)]
pub enum WordforgeError {
    /// A raw source (dictionary or blocklist) could not be opened or read.
    #[error("Cannot read source '{path}': {source}")]
    SourceUnavailable {
        /// Path of the source that failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// An output destination could not be created or written.
    #[error("Cannot write sink '{path}': {source}")]
    SinkUnwritable {
        /// Path of the sink that failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for Wordforge operations.
pub type Result<T> = std::result::Result<T, WordforgeError>;

impl From<serde_json::Error> for WordforgeError {
    fn from(err: serde_json::Error) -> Self {
        WordforgeError::Serialization(err.to_string())
    }
}
