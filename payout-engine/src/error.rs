//! Error types for the payout engine

use thiserror::Error;

/// Result type
pub type Result<T> = std::result::Result<T, Error>;

/// Classifies an error as retryable or final
///
/// The retry executor is opaque to what an operation does; this is the only
/// thing it knows about the operation's errors.
pub trait Retryable {
    /// True if the error is expected to clear on retry
    fn is_transient(&self) -> bool;
}

/// Payout engine error
#[derive(Debug, Error)]
pub enum Error {
    /// Expected, retryable failure (downstream hiccup)
    #[error("Transient failure: {0}")]
    Transient(String),

    /// Final failure; retrying will not help
    #[error("Fatal failure: {0}")]
    Fatal(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Retryable for Error {
    fn is_transient(&self) -> bool {
        matches!(self, Error::Transient(_))
    }
}
