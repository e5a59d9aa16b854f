//! Configuration for the fraud pipeline

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Fraud threshold; a verdict is fraud when `score > fraud_threshold`
    pub fraud_threshold: f64,

    /// Latency envelope for a single scoring call (milliseconds).
    /// A call that exceeds it is treated as scoring 1.0.
    pub score_timeout_ms: u64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            fraud_threshold: 0.8,
            score_timeout_ms: 200,
        }
    }
}

impl PipelineConfig {
    /// Load from file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: PipelineConfig = toml::from_str(&content)
            .map_err(|e| crate::Error::InvalidConfig(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate invariants
    pub fn validate(&self) -> crate::Result<()> {
        if !(0.0..=1.0).contains(&self.fraud_threshold) {
            return Err(crate::Error::InvalidConfig(format!(
                "fraud_threshold must be in [0, 1], got {}",
                self.fraud_threshold
            )));
        }
        if self.score_timeout_ms == 0 {
            return Err(crate::Error::InvalidConfig(
                "score_timeout_ms must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Configuration for the deterministic heuristic scorer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeuristicConfig {
    /// Simulated remote-model latency (milliseconds)
    pub simulated_latency_ms: u64,

    /// Amounts strictly above this raise the score
    pub high_amount_cutoff: Decimal,

    /// Origin regions considered suspicious
    pub suspicious_regions: Vec<String>,

    /// Score assigned to an unremarkable record
    pub base_score: f64,

    /// Added when any suspicion feature fires
    pub suspicion_weight: f64,
}

impl Default for HeuristicConfig {
    fn default() -> Self {
        Self {
            simulated_latency_ms: 40,
            high_amount_cutoff: Decimal::from(900),
            suspicious_regions: vec!["Unknown".to_string()],
            base_score: 0.4,
            suspicion_weight: 0.45,
        }
    }
}
