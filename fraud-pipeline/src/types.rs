//! Core types for the fraud pipeline

use ledger_store::TransactionId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

/// Incoming transaction record, immutable once ingested
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Transaction ID, unique within a batch
    pub id: TransactionId,

    /// Transaction amount
    pub amount: Decimal,

    /// Region the transaction originated from
    pub origin_region: String,

    /// Free-form metadata attached by the record source
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

impl TransactionRecord {
    /// Create a record with no metadata
    pub fn new(id: impl Into<String>, amount: Decimal, origin_region: impl Into<String>) -> Self {
        Self {
            id: TransactionId::new(id),
            amount,
            origin_region: origin_region.into(),
            metadata: HashMap::new(),
        }
    }

    /// Attach metadata
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

/// One scoring call's result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Scored transaction
    pub transaction_id: TransactionId,

    /// Fraud score in [0, 1]
    pub score: f64,

    /// Wall-clock time the scoring call took
    pub elapsed: Duration,
}

/// Per-record fraud decision
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FraudVerdict {
    /// Scored transaction
    pub transaction_id: TransactionId,

    /// Fraud score in [0, 1]
    pub score: f64,

    /// True if the score crossed the fraud threshold (strict `>`)
    pub is_fraud: bool,

    /// End-to-end scoring latency for this record
    pub latency: Duration,
}

impl FraudVerdict {
    /// Derive the verdict from a score result and the fraud threshold
    pub fn from_score(result: ScoreResult, threshold: f64) -> Self {
        Self {
            transaction_id: result.transaction_id,
            is_fraud: result.score > threshold,
            score: result.score,
            latency: result.elapsed,
        }
    }
}

/// Result of evaluating one batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchOutcome {
    /// One verdict per input record, in input order
    pub verdicts: Vec<FraudVerdict>,

    /// Average scoring latency across the batch
    pub avg_latency: Duration,
}

impl BatchOutcome {
    /// Number of verdicts flagged as fraud
    pub fn flagged_count(&self) -> usize {
        self.verdicts.iter().filter(|v| v.is_fraud).count()
    }
}
