//! Retry policies for HTTP requests.
//!
//! Only reads are ever retried. Every endpoint that mutates ledger state
//! (transfers, redemption, withdrawal submission) uses `RetryPolicy::None`:
//! a failed mutation is surfaced to the user, who resubmits.

use std::time::Duration;

/// Retry policy for an HTTP request.
#[derive(Debug, Clone, Default)]
pub enum RetryPolicy {
    /// No retries. The only valid policy for mutating POST endpoints.
    #[default]
    None,
    /// Retry on transport failures and 502/503/504, honoring 429 backoff.
    /// Default for GET endpoints.
    Idempotent,
    /// Caller-provided retry configuration.
    Custom(RetryConfig),
}

/// Configuration for retry behavior.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of retry attempts (not counting the initial request).
    pub max_retries: u32,
    /// Initial delay before the first retry.
    pub initial_delay: Duration,
    /// Maximum delay between retries.
    pub max_delay: Duration,
    /// Multiplier applied to the delay after each retry.
    pub backoff_factor: f64,
    /// Whether to add jitter to the delay.
    pub jitter: bool,
    /// HTTP status codes that trigger a retry.
    pub retryable_statuses: Vec<u16>,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay: Duration::from_millis(200),
            max_delay: Duration::from_secs(10),
            backoff_factor: 2.0,
            jitter: true,
            retryable_statuses: vec![502, 503, 504],
        }
    }
}

impl RetryConfig {
    /// The default config for idempotent (GET) requests.
    pub fn idempotent() -> Self {
        Self {
            retryable_statuses: vec![429, 502, 503, 504],
            ..Self::default()
        }
    }

    /// Calculate delay for a given attempt (0-indexed).
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let base = self.initial_delay.as_millis() as f64
            * self.backoff_factor.powi(attempt as i32);
        let capped = base.min(self.max_delay.as_millis() as f64);

        let final_ms = if self.jitter {
            let jitter_range = capped * 0.25;
            let jitter = (rand::random::<f64>() - 0.5) * 2.0 * jitter_range;
            (capped + jitter).max(0.0)
        } else {
            capped
        };

        Duration::from_millis(final_ms as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_never_retries() {
        assert!(matches!(RetryPolicy::default(), RetryPolicy::None));
    }

    #[test]
    fn test_idempotent_config_honors_rate_limit_status() {
        let config = RetryConfig::idempotent();
        assert!(config.retryable_statuses.contains(&429));
        assert!(config.retryable_statuses.contains(&503));
    }

    #[test]
    fn test_backoff_doubles_without_jitter() {
        let config = RetryConfig {
            jitter: false,
            ..RetryConfig::default()
        };
        assert_eq!(config.delay_for_attempt(0).as_millis(), 200);
        assert_eq!(config.delay_for_attempt(1).as_millis(), 400);
        assert_eq!(config.delay_for_attempt(2).as_millis(), 800);
    }

    #[test]
    fn test_backoff_caps_at_max_delay() {
        let config = RetryConfig {
            initial_delay: Duration::from_millis(1000),
            max_delay: Duration::from_millis(1500),
            backoff_factor: 4.0,
            jitter: false,
            ..RetryConfig::default()
        };
        assert_eq!(config.delay_for_attempt(5).as_millis(), 1500);
    }
}
