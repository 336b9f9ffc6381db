//! Error types for Laer.

use thiserror::Error;

/// Library-level error type for Laer operations.
///
/// Completion service failures are deliberately absent here: the completion
/// client turns them into [`crate::completion::Completion::Failed`] so the
/// pipeline always has text to parse.
#[derive(Error, Debug)]
pub enum LaerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid YouTube URL: {0}")]
    InvalidVideoUrl(String),

    #[error("Could not retrieve transcript: {0}")]
    TranscriptFetch(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type alias for Laer operations.
pub type Result<T> = std::result::Result<T, LaerError>;
