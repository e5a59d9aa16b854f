//! Core types for reconciliation

use ledger_store::{LedgerEntry, TransactionId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of the internal ledger export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InternalRecord {
    /// Transaction ID
    pub transaction_id: TransactionId,

    /// Amount the ledger recorded
    pub amount: Decimal,
}

impl InternalRecord {
    /// Create an internal export row
    pub fn new(transaction_id: impl Into<String>, amount: Decimal) -> Self {
        Self {
            transaction_id: TransactionId::new(transaction_id),
            amount,
        }
    }
}

impl From<&LedgerEntry> for InternalRecord {
    fn from(entry: &LedgerEntry) -> Self {
        Self {
            transaction_id: TransactionId::new(entry.entry_id.to_string()),
            amount: entry.amount,
        }
    }
}

/// One row of the external gateway export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalRecord {
    /// Transaction ID
    pub transaction_id: TransactionId,

    /// Amount the gateway recorded
    pub amount: Decimal,
}

impl ExternalRecord {
    /// Create an external export row
    pub fn new(transaction_id: impl Into<String>, amount: Decimal) -> Self {
        Self {
            transaction_id: TransactionId::new(transaction_id),
            amount,
        }
    }
}

/// A transaction whose two views disagree
///
/// Computed fresh on every run; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscrepancyRecord {
    /// Transaction ID
    pub transaction_id: TransactionId,

    /// Amount on the internal side, if present
    pub internal_amount: Option<Decimal>,

    /// Amount on the external side, if present
    pub external_amount: Option<Decimal>,

    /// Absolute difference; a missing side counts in full
    pub delta: Decimal,
}

/// Result of one reconciliation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReconciliationReport {
    /// Discrepant rows, in internal-export order
    pub discrepancies: Vec<DiscrepancyRecord>,

    /// Internal rows examined
    pub records_checked: usize,

    /// Sum of deltas over all discrepant rows
    pub total_exposure: Decimal,
}

impl ReconciliationReport {
    /// True if the two views agree completely
    pub fn is_consistent(&self) -> bool {
        self.discrepancies.is_empty()
    }
}
