//! Alert sink for fraud verdicts
//!
//! One alert is emitted per verdict flagged as fraud. The sink is a
//! collaborator boundary: production wires it to the notification service,
//! tests record what was emitted.

use crate::types::FraudVerdict;

/// Receives one alert per fraudulent verdict
pub trait AlertSink: Send + Sync {
    /// Handle a fraud alert
    fn fraud_alert(&self, verdict: &FraudVerdict);
}

/// Default sink: logs the alert payload as JSON via tracing
#[derive(Debug, Default)]
pub struct LogAlertSink;

impl AlertSink for LogAlertSink {
    fn fraud_alert(&self, verdict: &FraudVerdict) {
        let payload = serde_json::to_string(verdict)
            .unwrap_or_else(|_| format!("{{\"transaction_id\":\"{}\"}}", verdict.transaction_id));
        tracing::warn!(
            transaction_id = %verdict.transaction_id,
            score = verdict.score,
            latency_ms = verdict.latency.as_millis() as u64,
            %payload,
            "fraud detected"
        );
    }
}
