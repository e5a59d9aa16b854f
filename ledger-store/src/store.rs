//! In-memory append-only ledger store
//!
//! The store is the single shared-mutable touchpoint in the payout path.
//! Appends are serialized behind a write lock so concurrent payout
//! invocations can never lose or partially interleave an entry. Queries
//! return cloned entries; callers can never mutate what the store holds.

use crate::types::{LedgerEntry, MerchantId};
use parking_lot::RwLock;

/// Append-only collection of recorded payouts
#[derive(Debug, Default)]
pub struct LedgerStore {
    entries: RwLock<Vec<LedgerEntry>>,
}

impl LedgerStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry
    ///
    /// Always succeeds; the append is atomic with respect to concurrent
    /// appends and reads.
    pub fn append(&self, entry: LedgerEntry) {
        tracing::debug!(
            entry_id = %entry.entry_id,
            merchant_id = %entry.merchant_id,
            amount = %entry.amount,
            "ledger append"
        );
        self.entries.write().push(entry);
    }

    /// All payouts recorded for a merchant, in append order
    pub fn merchant_payouts(&self, merchant_id: &MerchantId) -> Vec<LedgerEntry> {
        self.entries
            .read()
            .iter()
            .filter(|e| &e.merchant_id == merchant_id)
            .cloned()
            .collect()
    }

    /// Point-in-time snapshot of the whole ledger, in append order
    pub fn snapshot(&self) -> Vec<LedgerEntry> {
        self.entries.read().clone()
    }

    /// Number of recorded entries
    pub fn entry_count(&self) -> usize {
        self.entries.read().len()
    }

    /// True if nothing has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
