//! Generic retry executor with exponential backoff
//!
//! Wraps any fallible async operation. Transient failures are absorbed and
//! retried after an exponentially growing delay (base 2); the
//! `max_retries`-th consecutive transient failure surfaces as
//! [`RetryError::Exhausted`]. A non-transient failure stops the executor
//! immediately. The executor knows nothing about what the operation does,
//! only how its errors classify via [`Retryable`].

use crate::error::Retryable;
use crate::{Error, Result};
use std::future::Future;
use tokio::time::{sleep, Duration};
use tracing::{error, info, warn};

/// Retry budget and backoff schedule
///
/// Construct through [`RetryPolicy::new`] (validated) or [`Default`]; the
/// budget is guaranteed to be in 1..=16, which keeps the backoff schedule
/// within `Duration` arithmetic.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    max_retries: u32,
    initial_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay: Duration::from_secs(1),
        }
    }
}

/// Why a retried operation ultimately failed
#[derive(Debug)]
pub enum RetryError<E> {
    /// The operation reported a non-retryable error
    Fatal {
        /// Attempt the error occurred on
        attempts: u32,
        /// The operation's error
        source: E,
    },

    /// Every attempt in the budget failed transiently
    Exhausted {
        /// Attempts made (equals the configured budget)
        attempts: u32,
        /// The last transient error seen
        last: E,
    },
}

impl<E> RetryError<E> {
    /// Attempts made before the executor stopped
    pub fn attempts(&self) -> u32 {
        match self {
            RetryError::Fatal { attempts, .. } | RetryError::Exhausted { attempts, .. } => {
                *attempts
            }
        }
    }

    /// The underlying operation error
    pub fn into_inner(self) -> E {
        match self {
            RetryError::Fatal { source, .. } => source,
            RetryError::Exhausted { last, .. } => last,
        }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for RetryError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RetryError::Fatal { attempts, source } => {
                write!(f, "fatal failure on attempt {}: {}", attempts, source)
            }
            RetryError::Exhausted { attempts, last } => {
                write!(f, "gave up after {} attempts: {}", attempts, last)
            }
        }
    }
}

impl<E: std::error::Error + 'static> std::error::Error for RetryError<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RetryError::Fatal { source, .. } => Some(source),
            RetryError::Exhausted { last, .. } => Some(last),
        }
    }
}

impl RetryPolicy {
    /// Create a policy, validating the budget
    pub fn new(max_retries: u32, initial_delay: Duration) -> Result<Self> {
        if max_retries == 0 {
            return Err(Error::InvalidConfig(
                "max_retries must be at least 1".to_string(),
            ));
        }
        if max_retries > 16 {
            return Err(Error::InvalidConfig(format!(
                "max_retries {} would overflow the backoff schedule (max 16)",
                max_retries
            )));
        }
        Ok(Self {
            max_retries,
            initial_delay,
        })
    }

    /// Total attempts before giving up
    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Delay after the first failed attempt; doubles after each subsequent one
    pub fn initial_delay(&self) -> Duration {
        self.initial_delay
    }

    /// Total backoff slept before giving up: `initial_delay * (2^(max_retries-1) - 1)`
    ///
    /// The final failed attempt is not followed by a delay.
    pub fn max_total_backoff(&self) -> Duration {
        self.initial_delay * ((1u32 << (self.max_retries - 1)) - 1)
    }

    /// Run `operation` under this policy
    ///
    /// The operation receives the 1-based attempt number. Success at any
    /// attempt returns immediately.
    pub async fn execute<T, E, F, Fut>(&self, mut operation: F) -> std::result::Result<T, RetryError<E>>
    where
        E: Retryable + std::fmt::Display,
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = std::result::Result<T, E>>,
    {
        let mut delay = self.initial_delay;
        let mut attempt = 1u32;

        loop {
            match operation(attempt).await {
                Ok(value) => {
                    if attempt > 1 {
                        info!(attempt, "operation succeeded after retries");
                    }
                    return Ok(value);
                }
                Err(e) if e.is_transient() => {
                    if attempt >= self.max_retries {
                        error!(attempts = attempt, error = %e, "retries exhausted, giving up");
                        return Err(RetryError::Exhausted {
                            attempts: attempt,
                            last: e,
                        });
                    }
                    warn!(
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        error = %e,
                        "transient failure, backing off"
                    );
                    sleep(delay).await;
                    delay *= 2;
                    attempt += 1;
                }
                Err(e) => {
                    error!(attempt, error = %e, "fatal failure, not retrying");
                    return Err(RetryError::Fatal {
                        attempts: attempt,
                        source: e,
                    });
                }
            }
        }
    }
}
