//! Transport retry with exponential backoff
//!
//! Only transport failures (network errors, per-request timeouts) are ever
//! retried. Vendor faults are final. The default policy makes a single
//! attempt; callers opt in to retries by raising `max_attempts`.

use crate::error::{SymantecError, SymantecResult};
use crate::logging::{log_debug, log_error};

use std::time::{Duration, Instant};
use tokio::time::sleep;

/// Retry policy configuration for partner API requests
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RetryPolicy {
    /// Maximum number of attempts, including the first one
    pub max_attempts: u32,
    /// Initial delay before first retry
    pub initial_delay: Duration,
    /// Maximum delay between retries
    pub max_delay: Duration,
    /// Multiplier for exponential backoff
    pub backoff_multiplier: f64,
    /// Maximum total operation time
    pub total_timeout: Duration,
    /// Request timeout for individual attempts
    pub request_timeout: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 1,
            initial_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(16),
            backoff_multiplier: 2.0,
            total_timeout: Duration::from_secs(300),
            request_timeout: Duration::from_secs(60),
        }
    }
}

impl RetryPolicy {
    /// Check the backoff settings can produce a usable delay
    ///
    /// # Errors
    ///
    /// Returns [`SymantecError::ConfigurationError`] if `backoff_multiplier`
    /// is not a positive finite number.
    pub fn validate(&self) -> SymantecResult<()> {
        if !self.backoff_multiplier.is_finite() || self.backoff_multiplier <= 0.0 {
            return Err(SymantecError::configuration_error(format!(
                "Backoff multiplier must be a positive number, got {}",
                self.backoff_multiplier
            )));
        }
        Ok(())
    }
}

/// Retry executor that handles exponential backoff
#[derive(Debug)]
pub(crate) struct RetryExecutor {
    pub(crate) policy: RetryPolicy,
}

impl Default for RetryExecutor {
    fn default() -> Self {
        Self::new(RetryPolicy::default())
    }
}

impl RetryExecutor {
    pub fn new(policy: RetryPolicy) -> Self {
        Self { policy }
    }

    /// Execute a request with retry logic
    pub async fn execute<F, Fut, T>(&self, operation: F) -> SymantecResult<T>
    where
        F: Fn() -> Fut,
        Fut: std::future::Future<Output = SymantecResult<T>>,
    {
        let start_time = Instant::now();
        let max_attempts = self.policy.max_attempts.max(1);
        let mut attempt = 0;
        let mut last_error = None;

        while attempt < max_attempts {
            if attempt > 0 && start_time.elapsed() >= self.policy.total_timeout {
                return Err(SymantecError::timeout(self.policy.total_timeout.as_secs()));
            }

            attempt += 1;
            log_debug!(
                attempt = attempt,
                max_attempts = max_attempts,
                "Executing partner API request"
            );

            let operation_start = Instant::now();
            let error = match tokio::time::timeout(self.policy.request_timeout, operation()).await {
                Ok(Ok(response)) => {
                    log_debug!(
                        attempt = attempt,
                        duration_ms = operation_start.elapsed().as_millis(),
                        "Request succeeded"
                    );
                    return Ok(response);
                }
                Ok(Err(error)) => error,
                Err(_elapsed) => SymantecError::timeout(self.policy.request_timeout.as_secs()),
            };

            if !error.is_retryable() {
                return Err(error);
            }

            if attempt < max_attempts {
                let delay = self.calculate_delay(attempt);
                log_debug!(
                    attempt = attempt,
                    max_attempts = max_attempts,
                    delay_ms = delay.as_millis(),
                    error = %error,
                    "Request failed, retrying after delay"
                );
                sleep(delay).await;
            }
            last_error = Some(error);
        }

        let final_error = last_error.unwrap_or_else(|| {
            SymantecError::request_failed("Maximum retry attempts exceeded", None)
        });

        if attempt > 1 {
            log_error!(
                attempts = attempt,
                total_duration_ms = start_time.elapsed().as_millis(),
                error = %final_error,
                "Request failed after all retry attempts"
            );
        }

        Err(final_error)
    }

    /// Calculate delay for exponential backoff
    pub fn calculate_delay(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1) as i32;
        let delay_seconds =
            self.policy.initial_delay.as_secs_f64() * self.policy.backoff_multiplier.powi(exponent);

        // NaN and negative products collapse to zero
        let delay_seconds = delay_seconds
            .min(self.policy.max_delay.as_secs_f64())
            .max(0.0);

        // Up to 10% jitter
        let jitter = fastrand::f64() * 0.1;
        Duration::try_from_secs_f64(delay_seconds * (1.0 + jitter))
            .unwrap_or(self.policy.max_delay)
    }
}
