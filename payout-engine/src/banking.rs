//! Banking API capability
//!
//! The downstream bank is an external collaborator; the engine only relies
//! on its return/failure contract. Timeouts are transient and safe to retry,
//! rejections are final.
//!
//! Open product question: `attempt_charge` carries no idempotency key, so a
//! charge that succeeded server-side while the response was lost would be
//! retried and double-charged. Inherited from the current bank contract;
//! flagged for a product decision rather than papered over here.

use crate::error::Retryable;
use async_trait::async_trait;
use rust_decimal::Decimal;
use thiserror::Error;

/// Banking API failure
#[derive(Debug, Error)]
pub enum BankError {
    /// The bank did not answer in time; the charge may or may not have landed
    #[error("Bank API timeout: {0}")]
    Timeout(String),

    /// The bank refused the charge; retrying will not change the answer
    #[error("Bank rejected the charge: {0}")]
    Rejected(String),
}

impl Retryable for BankError {
    fn is_transient(&self) -> bool {
        matches!(self, BankError::Timeout(_))
    }
}

/// Moves money to a merchant's bank account
#[async_trait]
pub trait BankingApi: Send + Sync {
    /// Attempt to charge `amount`; each invocation is independent
    async fn attempt_charge(&self, amount: Decimal) -> Result<(), BankError>;
}
