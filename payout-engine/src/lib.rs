//! Instant payout engine
//!
//! Executes merchant payouts against an unreliable downstream banking API.
//! Charges go through a generic retry executor with exponential backoff;
//! only a confirmed success is recorded in the ledger. An exhausted retry
//! budget is a reported business outcome, never a fault that propagates into
//! the caller's batch context.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod banking;
pub mod config;
pub mod error;
pub mod retry;
pub mod service;
pub mod types;

pub use banking::{BankError, BankingApi};
pub use config::PayoutConfig;
pub use error::{Error, Result, Retryable};
pub use retry::{RetryError, RetryPolicy};
pub use service::PayoutService;
pub use types::*;
