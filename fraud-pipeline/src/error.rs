//! Error types for the fraud pipeline

use thiserror::Error;

/// Result type
pub type Result<T> = std::result::Result<T, Error>;

/// Fraud pipeline error
#[derive(Debug, Error)]
pub enum Error {
    /// Scoring call failed (absorbed fail-closed by the pipeline)
    #[error("Scoring failed: {0}")]
    Scoring(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
