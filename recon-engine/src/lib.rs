//! Ledger reconciliation engine
//!
//! Joins the internal ledger export against an external gateway export by
//! transaction id and quantifies every discrepancy. Mismatches are the
//! engine's normal output, not errors; an error is reserved for malformed
//! input (duplicate ids that make the join ambiguous).
//!
//! Reconciliation runs over two already-materialized snapshots, so the
//! engine is a plain synchronous batch computation.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod engine;
pub mod error;
pub mod types;

pub use engine::ReconciliationEngine;
pub use error::{Error, Result};
pub use types::*;
