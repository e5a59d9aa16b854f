//! Error types for the reconciliation engine

use ledger_store::TransactionId;
use thiserror::Error;

/// Result type
pub type Result<T> = std::result::Result<T, Error>;

/// Reconciliation error
///
/// Amount mismatches are never errors; these cover un-joinable input only.
#[derive(Debug, Error)]
pub enum Error {
    /// The internal export repeats a transaction id
    #[error("Duplicate transaction id in internal export: {0}")]
    DuplicateInternalId(TransactionId),

    /// The external export repeats a transaction id
    #[error("Duplicate transaction id in external export: {0}")]
    DuplicateExternalId(TransactionId),
}
