//! Reconciliation engine
//!
//! Left outer join of the internal export against the external export,
//! keyed by transaction id. Every internal row joins; a row is discrepant
//! when its external counterpart is absent or disagrees on the amount.

use crate::types::{DiscrepancyRecord, ExternalRecord, InternalRecord, ReconciliationReport};
use crate::{Error, Result};
use ledger_store::TransactionId;
use rust_decimal::Decimal;
use std::collections::{HashMap, HashSet};
use tracing::info;

/// Reconciliation engine
#[derive(Debug, Clone)]
pub struct ReconciliationEngine {
    /// Amount difference at or below this is not a discrepancy.
    /// Zero by default: comparison is exact unless explicitly configured.
    tolerance: Decimal,
}

impl ReconciliationEngine {
    /// Create an engine with exact amount comparison
    pub fn new() -> Self {
        Self {
            tolerance: Decimal::ZERO,
        }
    }

    /// Allow amount differences up to `tolerance` (for gateways that round)
    pub fn with_tolerance(mut self, tolerance: Decimal) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Reconcile the internal export against the external export
    ///
    /// Neither snapshot is mutated; the same inputs always produce the same
    /// report. Duplicate ids in either export make the join ambiguous and
    /// are rejected.
    pub fn reconcile(
        &self,
        internal: &[InternalRecord],
        external: &[ExternalRecord],
    ) -> Result<ReconciliationReport> {
        let mut external_by_id: HashMap<&TransactionId, Decimal> =
            HashMap::with_capacity(external.len());
        for record in external {
            if external_by_id
                .insert(&record.transaction_id, record.amount)
                .is_some()
            {
                return Err(Error::DuplicateExternalId(record.transaction_id.clone()));
            }
        }

        let mut seen: HashSet<&TransactionId> = HashSet::with_capacity(internal.len());
        let mut discrepancies = Vec::new();

        for record in internal {
            if !seen.insert(&record.transaction_id) {
                return Err(Error::DuplicateInternalId(record.transaction_id.clone()));
            }

            match external_by_id.get(&record.transaction_id) {
                Some(&external_amount) => {
                    let delta = (record.amount - external_amount).abs();
                    if delta > self.tolerance {
                        discrepancies.push(DiscrepancyRecord {
                            transaction_id: record.transaction_id.clone(),
                            internal_amount: Some(record.amount),
                            external_amount: Some(external_amount),
                            delta,
                        });
                    }
                }
                // Absent on the external side: the full amount is exposed
                None => discrepancies.push(DiscrepancyRecord {
                    transaction_id: record.transaction_id.clone(),
                    internal_amount: Some(record.amount),
                    external_amount: None,
                    delta: record.amount,
                }),
            }
        }

        let total_exposure: Decimal = discrepancies.iter().map(|d| d.delta).sum();

        info!(
            records_checked = internal.len(),
            discrepancies = discrepancies.len(),
            %total_exposure,
            "reconciliation complete"
        );

        Ok(ReconciliationReport {
            discrepancies,
            records_checked: internal.len(),
            total_exposure,
        })
    }
}

impl Default for ReconciliationEngine {
    fn default() -> Self {
        Self::new()
    }
}
