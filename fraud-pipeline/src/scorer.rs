//! Risk scorer capability
//!
//! The pipeline is polymorphic over this trait so the model behind it can be
//! swapped (hosted ML endpoint, rules engine, test double) without touching
//! any caller.

use crate::config::HeuristicConfig;
use crate::types::TransactionRecord;
use crate::Result;
use async_trait::async_trait;
use tokio::time::Duration;

/// Scores one transaction record for fraud risk
#[async_trait]
pub trait RiskScorer: Send + Sync {
    /// Return a fraud score in [0, 1] for the record, taking bounded time
    async fn score(&self, record: &TransactionRecord) -> Result<f64>;
}

/// Deterministic feature-based scorer
///
/// Stands in for a remote model endpoint: it sleeps for the configured
/// latency to model the network hop, then scores from two features of the
/// record (amount above the cutoff, suspicious origin region).
pub struct HeuristicScorer {
    config: HeuristicConfig,
}

impl HeuristicScorer {
    /// Create scorer with the given configuration
    pub fn new(config: HeuristicConfig) -> Self {
        Self { config }
    }

    fn is_suspicious(&self, record: &TransactionRecord) -> bool {
        record.amount > self.config.high_amount_cutoff
            || self
                .config
                .suspicious_regions
                .iter()
                .any(|r| r == &record.origin_region)
    }
}

impl Default for HeuristicScorer {
    fn default() -> Self {
        Self::new(HeuristicConfig::default())
    }
}

#[async_trait]
impl RiskScorer for HeuristicScorer {
    async fn score(&self, record: &TransactionRecord) -> Result<f64> {
        // Network hop to the model
        tokio::time::sleep(Duration::from_millis(self.config.simulated_latency_ms)).await;

        let mut score = self.config.base_score;
        if self.is_suspicious(record) {
            score += self.config.suspicion_weight;
        }

        Ok(score.clamp(0.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn instant_config() -> HeuristicConfig {
        HeuristicConfig {
            simulated_latency_ms: 0,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_clean_record_scores_base() {
        let scorer = HeuristicScorer::new(instant_config());
        let record = TransactionRecord::new("TXN_A1", Decimal::from(100), "US");

        let score = scorer.score(&record).await.unwrap();
        assert_eq!(score, 0.4);
    }

    #[tokio::test]
    async fn test_high_amount_raises_score() {
        let scorer = HeuristicScorer::new(instant_config());
        let record = TransactionRecord::new("TXN_D4", Decimal::from(1200), "US");

        let score = scorer.score(&record).await.unwrap();
        assert!(score > 0.8);
    }

    #[tokio::test]
    async fn test_suspicious_region_raises_score() {
        let scorer = HeuristicScorer::new(instant_config());
        let record = TransactionRecord::new("TXN_B2", Decimal::from(950), "Unknown");

        let score = scorer.score(&record).await.unwrap();
        assert!(score > 0.8);
    }

    #[tokio::test]
    async fn test_score_is_deterministic() {
        let scorer = HeuristicScorer::new(instant_config());
        let record = TransactionRecord::new("TXN_C3", Decimal::from(50), "UK");

        let first = scorer.score(&record).await.unwrap();
        let second = scorer.score(&record).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_score_clamped_to_unit_interval() {
        let config = HeuristicConfig {
            simulated_latency_ms: 0,
            base_score: 0.9,
            suspicion_weight: 0.9,
            ..Default::default()
        };
        let scorer = HeuristicScorer::new(config);
        let record = TransactionRecord::new("TXN_X", Decimal::from(5000), "Unknown");

        let score = scorer.score(&record).await.unwrap();
        assert_eq!(score, 1.0);
    }
}
