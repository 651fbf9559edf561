//! Error types for tehran-rules

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No rule found with ID: {0}")]
    RuleNotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;
