//! Core types for the payout ledger

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Transaction identifier (unique within a batch or export)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransactionId(String);

impl TransactionId {
    /// Create new transaction ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get as string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Merchant identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MerchantId(String);

impl MerchantId {
    /// Create new merchant ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get as string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MerchantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Payout entry type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryType {
    /// Instant payout, settled immediately on bank confirmation
    Instant,
    /// Standard payout, settled on the regular schedule
    Standard,
}

/// A recorded payout, immutable once appended
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// Entry ID
    pub entry_id: Uuid,

    /// Merchant the payout was made to
    pub merchant_id: MerchantId,

    /// Payout amount
    pub amount: Decimal,

    /// Entry type
    pub entry_type: EntryType,

    /// When the payout was recorded
    pub recorded_at: DateTime<Utc>,
}

impl LedgerEntry {
    /// Create an instant-payout entry stamped with the current time
    pub fn instant(merchant_id: MerchantId, amount: Decimal) -> Self {
        Self {
            entry_id: Uuid::now_v7(),
            merchant_id,
            amount,
            entry_type: EntryType::Instant,
            recorded_at: Utc::now(),
        }
    }
}
