//! Instant payout service
//!
//! Orchestrates the banking capability, the retry executor, and the ledger.
//! The ledger append happens only after the bank confirms the charge, never
//! speculatively.

use crate::banking::BankingApi;
use crate::config::PayoutConfig;
use crate::error::Retryable;
use crate::retry::RetryPolicy;
use crate::types::{AttemptOutcome, PayoutAttempt, PayoutOutcome};
use crate::Result;
use ledger_store::{LedgerEntry, LedgerStore, MerchantId};
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Instant payout service
pub struct PayoutService {
    bank: Arc<dyn BankingApi>,
    ledger: Arc<LedgerStore>,
    retry: RetryPolicy,
}

impl PayoutService {
    /// Create a service with the default retry policy (3 attempts, 1 s backoff)
    pub fn new(bank: Arc<dyn BankingApi>, ledger: Arc<LedgerStore>) -> Self {
        Self {
            bank,
            ledger,
            retry: RetryPolicy::default(),
        }
    }

    /// Replace the retry policy
    pub fn with_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Create a service from configuration
    pub fn from_config(
        bank: Arc<dyn BankingApi>,
        ledger: Arc<LedgerStore>,
        config: &PayoutConfig,
    ) -> Result<Self> {
        let retry = config.retry_policy()?;
        Ok(Self::new(bank, ledger).with_policy(retry))
    }

    /// Execute an instant payout for a merchant
    ///
    /// Charges through the retry executor; on confirmed success the payout
    /// is recorded in the ledger. Exhausted retries and bank rejections are
    /// reported in the outcome and leave the ledger untouched.
    pub async fn trigger_instant_payout(
        &self,
        merchant_id: &MerchantId,
        amount: Decimal,
    ) -> PayoutOutcome {
        info!(%merchant_id, %amount, "processing instant payout");

        let bank = Arc::clone(&self.bank);
        let result = self
            .retry
            .execute(|attempt| {
                let bank = bank.clone();
                let merchant_id = merchant_id.clone();
                async move {
                    let result = bank.attempt_charge(amount).await;
                    let attempt_log = PayoutAttempt {
                        merchant_id,
                        amount,
                        attempt_number: attempt,
                        outcome: match &result {
                            Ok(()) => AttemptOutcome::Success,
                            Err(e) if e.is_transient() => AttemptOutcome::TransientFailure,
                            Err(_) => AttemptOutcome::FatalFailure,
                        },
                    };
                    debug!(?attempt_log, "banking attempt");
                    result
                }
            })
            .await;

        match result {
            Ok(()) => {
                let entry = LedgerEntry::instant(merchant_id.clone(), amount);
                self.ledger.append(entry.clone());
                info!(%merchant_id, entry_id = %entry.entry_id, "payout completed and recorded");
                PayoutOutcome::Paid(entry)
            }
            Err(e) => {
                error!(%merchant_id, %amount, error = %e, "payout failed");
                PayoutOutcome::Failed {
                    attempts: e.attempts(),
                    reason: e.to_string(),
                }
            }
        }
    }
}
