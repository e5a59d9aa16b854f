//! End-to-end pipeline flow against the heuristic scorer

use fraud_pipeline::{FraudPipeline, HeuristicScorer, PipelineConfig, TransactionRecord};
use rust_decimal::Decimal;
use std::sync::Arc;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_test_writer()
        .try_init();
}

fn sample_batch() -> Vec<TransactionRecord> {
    vec![
        TransactionRecord::new("TXN_A1", Decimal::from(100), "US"),
        TransactionRecord::new("TXN_B2", Decimal::from(950), "Unknown"),
        TransactionRecord::new("TXN_C3", Decimal::from(50), "UK"),
        TransactionRecord::new("TXN_D4", Decimal::from(1200), "US"),
    ]
}

#[tokio::test]
async fn heuristic_scorer_flags_suspicious_records() {
    init_tracing();
    let pipeline =
        FraudPipeline::new(Arc::new(HeuristicScorer::default()), PipelineConfig::default())
            .unwrap();

    let outcome = pipeline.evaluate_batch(&sample_batch()).await;

    assert_eq!(outcome.verdicts.len(), 4);
    let flagged: Vec<&str> = outcome
        .verdicts
        .iter()
        .filter(|v| v.is_fraud)
        .map(|v| v.transaction_id.as_str())
        .collect();
    assert_eq!(flagged, vec!["TXN_B2", "TXN_D4"]);

    // Every scoring call pays the simulated model hop, so the average
    // latency reflects it
    assert!(outcome.avg_latency.as_millis() >= 40);
}

#[tokio::test]
async fn stream_source_produces_the_same_verdicts() {
    init_tracing();
    let pipeline =
        FraudPipeline::new(Arc::new(HeuristicScorer::default()), PipelineConfig::default())
            .unwrap();

    let from_batch = pipeline.evaluate_batch(&sample_batch()).await;
    let from_stream = pipeline
        .evaluate_stream(tokio_stream::iter(sample_batch()))
        .await;

    let decisions = |outcome: &fraud_pipeline::BatchOutcome| {
        outcome
            .verdicts
            .iter()
            .map(|v| (v.transaction_id.clone(), v.is_fraud))
            .collect::<Vec<_>>()
    };
    assert_eq!(decisions(&from_batch), decisions(&from_stream));
}
