use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A target that could not be analyzed, with the reason it failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetFailure {
    pub url: String,
    pub reason: String,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid request: {0}")]
    Validation(String),

    #[error("Failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },

    #[error("Timed out fetching {url} after {budget_secs}s")]
    Timeout { url: String, budget_secs: u64 },

    #[error("All {} targets failed to analyze", .0.len())]
    AllTargetsFailed(Vec<TargetFailure>),
}

pub type Result<T> = std::result::Result<T, Error>;
