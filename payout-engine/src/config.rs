//! Configuration for the payout engine

use crate::retry::RetryPolicy;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Payout engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayoutConfig {
    /// Total banking attempts per payout
    pub max_retries: u32,

    /// Backoff after the first failed attempt (milliseconds)
    pub initial_delay_ms: u64,
}

impl Default for PayoutConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay_ms: 1_000,
        }
    }
}

impl PayoutConfig {
    /// Load from file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: PayoutConfig = toml::from_str(&content)
            .map_err(|e| crate::Error::InvalidConfig(format!("Failed to parse config: {}", e)))?;
        Ok(config)
    }

    /// Build the retry policy this configuration describes
    pub fn retry_policy(&self) -> crate::Result<RetryPolicy> {
        RetryPolicy::new(self.max_retries, Duration::from_millis(self.initial_delay_ms))
    }
}
