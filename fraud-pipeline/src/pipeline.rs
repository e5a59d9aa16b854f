//! Concurrent fraud decision pipeline
//!
//! Fans out one scoring call per record, applies the fraud threshold, and
//! reassembles verdicts in the caller's input order regardless of completion
//! order. Callers may index verdicts by position.

use crate::alert::{AlertSink, LogAlertSink};
use crate::config::PipelineConfig;
use crate::scorer::RiskScorer;
use crate::types::{BatchOutcome, FraudVerdict, ScoreResult, TransactionRecord};
use crate::Result;
use futures::future::join_all;
use std::sync::Arc;
use tokio::time::{timeout, Duration, Instant};
use tokio_stream::{Stream, StreamExt};
use tracing::{info, warn};

/// Score assigned when a scoring call errors or blows the latency envelope
const FAIL_CLOSED_SCORE: f64 = 1.0;

/// Fraud decision pipeline
pub struct FraudPipeline {
    scorer: Arc<dyn RiskScorer>,
    alerts: Arc<dyn AlertSink>,
    config: PipelineConfig,
}

impl FraudPipeline {
    /// Create a pipeline over the given scorer, alerting through tracing
    pub fn new(scorer: Arc<dyn RiskScorer>, config: PipelineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            scorer,
            alerts: Arc::new(LogAlertSink),
            config,
        })
    }

    /// Replace the alert sink
    pub fn with_alert_sink(mut self, alerts: Arc<dyn AlertSink>) -> Self {
        self.alerts = alerts;
        self
    }

    /// Evaluate a finite batch of records
    ///
    /// Returns exactly one verdict per record, in input order. A single
    /// record's scoring failure never aborts its siblings: the record is
    /// scored 1.0 (fail-closed) and the batch completes.
    pub async fn evaluate_batch(&self, records: &[TransactionRecord]) -> BatchOutcome {
        let started = Instant::now();

        // join_all preserves input order even though completion is unordered
        let verdicts = join_all(records.iter().map(|r| self.evaluate_record(r))).await;

        for verdict in verdicts.iter().filter(|v| v.is_fraud) {
            self.alerts.fraud_alert(verdict);
        }

        let avg_latency = if verdicts.is_empty() {
            Duration::ZERO
        } else {
            verdicts.iter().map(|v| v.latency).sum::<Duration>() / verdicts.len() as u32
        };

        info!(
            records = verdicts.len(),
            flagged = verdicts.iter().filter(|v| v.is_fraud).count(),
            avg_latency_ms = avg_latency.as_millis() as u64,
            batch_ms = started.elapsed().as_millis() as u64,
            "batch evaluated"
        );

        BatchOutcome {
            verdicts,
            avg_latency,
        }
    }

    /// Evaluate records arriving on a stream
    ///
    /// The stream is drained to a finite batch first; verdict order matches
    /// arrival order.
    pub async fn evaluate_stream<S>(&self, records: S) -> BatchOutcome
    where
        S: Stream<Item = TransactionRecord>,
    {
        let records: Vec<TransactionRecord> = records.collect().await;
        self.evaluate_batch(&records).await
    }

    /// Score one record and apply the threshold
    async fn evaluate_record(&self, record: &TransactionRecord) -> FraudVerdict {
        let envelope = Duration::from_millis(self.config.score_timeout_ms);
        let started = Instant::now();

        let score = match timeout(envelope, self.scorer.score(record)).await {
            Ok(Ok(score)) => score.clamp(0.0, 1.0),
            Ok(Err(e)) => {
                warn!(transaction_id = %record.id, error = %e, "scoring failed, failing closed");
                FAIL_CLOSED_SCORE
            }
            Err(_) => {
                warn!(
                    transaction_id = %record.id,
                    envelope_ms = self.config.score_timeout_ms,
                    "scoring exceeded latency envelope, failing closed"
                );
                FAIL_CLOSED_SCORE
            }
        };

        let result = ScoreResult {
            transaction_id: record.id.clone(),
            score,
            elapsed: started.elapsed(),
        };
        FraudVerdict::from_score(result, self.config.fraud_threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use async_trait::async_trait;
    use ledger_store::TransactionId;
    use parking_lot::Mutex;
    use rust_decimal::Decimal;
    use std::collections::HashMap;

    /// Per-record scoring script for a test double
    enum Script {
        Score(f64),
        SlowScore(f64, u64),
        Fail,
    }

    struct ScriptedScorer {
        plan: HashMap<String, Script>,
    }

    impl ScriptedScorer {
        fn new(plan: Vec<(&str, Script)>) -> Self {
            Self {
                plan: plan.into_iter().map(|(id, s)| (id.to_string(), s)).collect(),
            }
        }
    }

    #[async_trait]
    impl RiskScorer for ScriptedScorer {
        async fn score(&self, record: &TransactionRecord) -> Result<f64> {
            match self.plan.get(record.id.as_str()) {
                Some(Script::Score(score)) => Ok(*score),
                Some(Script::SlowScore(score, delay_ms)) => {
                    tokio::time::sleep(Duration::from_millis(*delay_ms)).await;
                    Ok(*score)
                }
                Some(Script::Fail) => Err(Error::Scoring("model endpoint unreachable".into())),
                None => Ok(0.0),
            }
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        alerts: Mutex<Vec<TransactionId>>,
    }

    impl AlertSink for RecordingSink {
        fn fraud_alert(&self, verdict: &FraudVerdict) {
            self.alerts.lock().push(verdict.transaction_id.clone());
        }
    }

    fn record(id: &str) -> TransactionRecord {
        TransactionRecord::new(id, Decimal::from(100), "US")
    }

    fn pipeline(scorer: ScriptedScorer) -> FraudPipeline {
        FraudPipeline::new(Arc::new(scorer), PipelineConfig::default()).unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn test_verdicts_in_input_order_despite_completion_order() {
        // Slowest record first, so completion order is the reverse of input order
        let scorer = ScriptedScorer::new(vec![
            ("A", Script::SlowScore(0.1, 150)),
            ("B", Script::SlowScore(0.2, 100)),
            ("C", Script::SlowScore(0.3, 50)),
        ]);
        let pipeline = pipeline(scorer);
        let records = vec![record("A"), record("B"), record("C")];

        let outcome = pipeline.evaluate_batch(&records).await;

        let ids: Vec<&str> = outcome
            .verdicts
            .iter()
            .map(|v| v.transaction_id.as_str())
            .collect();
        assert_eq!(ids, vec!["A", "B", "C"]);
        assert_eq!(outcome.verdicts[0].score, 0.1);
        assert_eq!(outcome.verdicts[2].score, 0.3);
    }

    #[tokio::test]
    async fn test_one_verdict_per_record() {
        let scorer = ScriptedScorer::new(vec![]);
        let pipeline = pipeline(scorer);
        let records: Vec<TransactionRecord> =
            (0..25).map(|i| record(&format!("TXN_{}", i))).collect();

        let outcome = pipeline.evaluate_batch(&records).await;
        assert_eq!(outcome.verdicts.len(), 25);
    }

    #[tokio::test]
    async fn test_threshold_is_strict() {
        let scorer = ScriptedScorer::new(vec![
            ("AT", Script::Score(0.8)),
            ("ABOVE", Script::Score(0.8000001)),
        ]);
        let pipeline = pipeline(scorer);

        let outcome = pipeline.evaluate_batch(&[record("AT"), record("ABOVE")]).await;

        // Exactly the threshold is not fraud; strictly above is
        assert!(!outcome.verdicts[0].is_fraud);
        assert!(outcome.verdicts[1].is_fraud);
    }

    #[tokio::test]
    async fn test_scorer_failure_fails_closed_without_aborting_siblings() {
        let scorer = ScriptedScorer::new(vec![
            ("OK1", Script::Score(0.2)),
            ("BROKEN", Script::Fail),
            ("OK2", Script::Score(0.3)),
        ]);
        let pipeline = pipeline(scorer);

        let outcome = pipeline
            .evaluate_batch(&[record("OK1"), record("BROKEN"), record("OK2")])
            .await;

        assert_eq!(outcome.verdicts.len(), 3);
        assert_eq!(outcome.verdicts[1].score, 1.0);
        assert!(outcome.verdicts[1].is_fraud);
        assert_eq!(outcome.verdicts[0].score, 0.2);
        assert_eq!(outcome.verdicts[2].score, 0.3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_latency_envelope_overrun_fails_closed() {
        let scorer = ScriptedScorer::new(vec![("SLOW", Script::SlowScore(0.1, 5_000))]);
        let pipeline = pipeline(scorer);

        let outcome = pipeline.evaluate_batch(&[record("SLOW")]).await;

        assert_eq!(outcome.verdicts[0].score, 1.0);
        assert!(outcome.verdicts[0].is_fraud);
    }

    #[tokio::test]
    async fn test_alerts_only_for_fraud_verdicts() {
        let scorer = ScriptedScorer::new(vec![
            ("CLEAN", Script::Score(0.1)),
            ("HOT", Script::Score(0.95)),
            ("EDGE", Script::Score(0.8)),
        ]);
        let sink = Arc::new(RecordingSink::default());
        let pipeline = FraudPipeline::new(Arc::new(scorer), PipelineConfig::default())
            .unwrap()
            .with_alert_sink(sink.clone());

        pipeline
            .evaluate_batch(&[record("CLEAN"), record("HOT"), record("EDGE")])
            .await;

        let alerts = sink.alerts.lock();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].as_str(), "HOT");
    }

    #[tokio::test]
    async fn test_empty_batch() {
        let pipeline = pipeline(ScriptedScorer::new(vec![]));

        let outcome = pipeline.evaluate_batch(&[]).await;
        assert!(outcome.verdicts.is_empty());
        assert_eq!(outcome.avg_latency, Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stream_entry_point_matches_arrival_order() {
        let scorer = ScriptedScorer::new(vec![
            ("S1", Script::SlowScore(0.9, 80)),
            ("S2", Script::SlowScore(0.1, 10)),
        ]);
        let pipeline = pipeline(scorer);
        let stream = tokio_stream::iter(vec![record("S1"), record("S2")]);

        let outcome = pipeline.evaluate_stream(stream).await;

        assert_eq!(outcome.verdicts.len(), 2);
        assert_eq!(outcome.verdicts[0].transaction_id.as_str(), "S1");
        assert!(outcome.verdicts[0].is_fraud);
        assert!(!outcome.verdicts[1].is_fraud);
    }
}
