//! Real-time fraud decision pipeline
//!
//! Scores incoming transaction records concurrently against a pluggable
//! risk model and flags the ones that cross the fraud threshold.
//!
//! The scorer is a capability: the pipeline only relies on "returns a score
//! in [0, 1] for a record, taking bounded time". A record whose scoring call
//! errors or blows the latency envelope is treated as scoring 1.0
//! (fail-closed) and never aborts its siblings.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod alert;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod scorer;
pub mod types;

pub use alert::{AlertSink, LogAlertSink};
pub use config::{HeuristicConfig, PipelineConfig};
pub use error::{Error, Result};
pub use pipeline::FraudPipeline;
pub use scorer::{HeuristicScorer, RiskScorer};
pub use types::*;
