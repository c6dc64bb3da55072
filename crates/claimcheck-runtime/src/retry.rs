//! Retry policy: bounded attempts, exponential backoff, no jitter.
//!
//! With the defaults the delays between attempts are 1s, 2s, 4s, 8s,
//! so the worst case is 5 timeouts plus 15s of sleeping.

use backon::ExponentialBuilder;
use std::time::Duration;

use crate::config::RetryConfig;

/// Backoff multiplier between consecutive retries.
const FACTOR: u32 = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    base_delay: Duration,
    max_delay: Duration,
}

impl RetryPolicy {
    pub fn new(config: &RetryConfig) -> Self {
        Self {
            max_attempts: config.max_attempts.max(1),
            base_delay: config.base_delay,
            max_delay: config.max_delay,
        }
    }

    /// Total attempts, including the first.
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Delay after the failed attempt at 0-based `index`: `base * 2^index`,
    /// capped at the configured maximum.
    pub fn delay_for(&self, index: u32) -> Duration {
        FACTOR
            .checked_pow(index)
            .and_then(|multiplier| self.base_delay.checked_mul(multiplier))
            .map_or(self.max_delay, |delay| delay.min(self.max_delay))
    }

    /// Sum of all delays when every attempt fails.
    pub fn total_delay(&self) -> Duration {
        (0..self.max_attempts.saturating_sub(1))
            .map(|index| self.delay_for(index))
            .sum()
    }

    /// Backoff schedule for `backon`; jitter stays disabled.
    pub fn backoff(&self) -> ExponentialBuilder {
        ExponentialBuilder::default()
            .with_min_delay(self.base_delay)
            .with_max_delay(self.max_delay)
            .with_factor(FACTOR as f32)
            .with_max_times(self.max_attempts.saturating_sub(1) as usize)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(&RetryConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use backon::BackoffBuilder;

    #[test]
    fn test_default_delays_double() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_attempts(), 5);
        assert_eq!(policy.delay_for(0), Duration::from_secs(1));
        assert_eq!(policy.delay_for(1), Duration::from_secs(2));
        assert_eq!(policy.delay_for(2), Duration::from_secs(4));
        assert_eq!(policy.delay_for(3), Duration::from_secs(8));
        assert_eq!(policy.total_delay(), Duration::from_secs(15));
    }

    #[test]
    fn test_delay_capped() {
        let policy = RetryPolicy::new(&RetryConfig {
            max_attempts: 10,
            base_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(5),
        });
        assert_eq!(policy.delay_for(3), Duration::from_secs(5));
        assert_eq!(policy.delay_for(64), Duration::from_secs(5));
    }

    #[test]
    fn test_backon_schedule_matches_delays() {
        let policy = RetryPolicy::default();
        let delays: Vec<Duration> = policy.backoff().build().collect();

        assert_eq!(
            delays,
            vec![
                Duration::from_secs(1),
                Duration::from_secs(2),
                Duration::from_secs(4),
                Duration::from_secs(8),
            ]
        );
    }

    #[test]
    fn test_single_attempt_has_no_retries() {
        let policy = RetryPolicy::new(&RetryConfig {
            max_attempts: 1,
            ..Default::default()
        });
        assert_eq!(policy.backoff().build().count(), 0);
        assert_eq!(policy.total_delay(), Duration::ZERO);
    }
}
