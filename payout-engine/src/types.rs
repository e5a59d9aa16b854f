//! Core types for the payout engine

use ledger_store::{LedgerEntry, MerchantId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How a single banking attempt ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttemptOutcome {
    /// The bank confirmed the charge
    Success,
    /// Expected, retryable failure
    TransientFailure,
    /// Final failure; no further attempts
    FatalFailure,
}

/// One banking attempt within a payout invocation
///
/// Exists only for the duration of the invocation; surfaced as a structured
/// log record, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayoutAttempt {
    /// Merchant being paid
    pub merchant_id: MerchantId,

    /// Payout amount
    pub amount: Decimal,

    /// 1-based attempt number
    pub attempt_number: u32,

    /// How the attempt ended
    pub outcome: AttemptOutcome,
}

/// Reported result of a payout invocation
///
/// Failure is a business outcome, not an error: it cannot be propagated with
/// `?` into aborting a caller's surrounding work.
#[derive(Debug, Clone)]
pub enum PayoutOutcome {
    /// The payout completed and was recorded in the ledger
    Paid(LedgerEntry),

    /// The payout did not complete; nothing was recorded
    Failed {
        /// Banking attempts made
        attempts: u32,
        /// Last failure seen
        reason: String,
    },
}

impl PayoutOutcome {
    /// True if the payout completed
    pub fn is_paid(&self) -> bool {
        matches!(self, PayoutOutcome::Paid(_))
    }
}
