//! Error handling for the matching engine

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatcherError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Embedding error: {0}")]
    Embedding(String),

    #[error("Model loading error: {0}")]
    ModelLoading(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Scoring error: {0}")]
    Scoring(#[from] ScoreError),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

/// Per-item scoring failure. A single bad posting in a batch produces one of
/// these in the run report instead of aborting the batch; a malformed
/// candidate surfaces as `MatcherError::Scoring` to the caller.
#[derive(Error, Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum ScoreError {
    #[error("candidate profile is malformed: {0}")]
    MalformedCandidate(String),

    #[error("job posting '{id}' is malformed: {reason}")]
    MalformedPosting { id: String, reason: String },
}

pub type Result<T> = std::result::Result<T, MatcherError>;

/// Convert anyhow errors from binary-level glue into our error type
impl From<anyhow::Error> for MatcherError {
    fn from(err: anyhow::Error) -> Self {
        MatcherError::InvalidInput(err.to_string())
    }
}
