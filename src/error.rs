//! Error handling for the resume scorer

use thiserror::Error;

/// Errors raised by the collaborators around the scoring core.
///
/// Scoring itself never fails; these cover configuration, profile loading and
/// report rendering.
#[derive(Error, Debug)]
pub enum ScorerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Profile not found: {0}")]
    ProfileNotFound(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, ScorerError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for ScorerError {
    fn from(err: anyhow::Error) -> Self {
        ScorerError::InvalidInput(err.to_string())
    }
}
