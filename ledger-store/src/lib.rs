//! Append-only payout ledger
//!
//! Core types shared across the transaction-integrity pipeline, plus the
//! in-memory ledger that records every successfully executed payout. The
//! store is append-only: entries are immutable once recorded and are owned
//! solely by the store. There is no eviction and no on-disk persistence.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod store;
pub mod types;

pub use store::LedgerStore;
pub use types::*;
