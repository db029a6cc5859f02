use std::time::Duration;

use inc_core::config::ScraperConfig;

/// Statuses worth another attempt: rate limiting and gateway trouble.
pub const RETRY_STATUSES: &[u16] = &[429, 500, 502, 503, 504];

/// Bounded exponential backoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub base: Duration,
    pub cap: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from_config(&ScraperConfig::default())
    }
}

impl RetryPolicy {
    pub fn from_config(config: &ScraperConfig) -> Self {
        Self {
            max_retries: config.max_retries,
            base: config.backoff,
            cap: config.max_backoff,
        }
    }

    /// No retries at all, used by tests and one-shot probes.
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            base: Duration::ZERO,
            cap: Duration::ZERO,
        }
    }

    pub fn is_retryable(status: u16) -> bool {
        RETRY_STATUSES.contains(&status)
    }

    /// Delay before retry number `retry` (1-based): base, 2*base, 4*base... capped.
    pub fn delay_for(&self, retry: u32) -> Duration {
        let exponent = retry.saturating_sub(1).min(31);
        self.base
            .checked_mul(1u32 << exponent)
            .map_or(self.cap, |d| d.min(self.cap))
    }

    pub fn should_retry(&self, retries_done: u32) -> bool {
        retries_done < self.max_retries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backoff_schedule() {
        let policy = RetryPolicy::default();
        let delays: Vec<u64> = (1..=8).map(|r| policy.delay_for(r).as_secs()).collect();
        assert_eq!(delays, vec![1, 2, 4, 8, 16, 32, 64, 120]);
        assert_eq!(policy.delay_for(40), Duration::from_secs(120));
    }

    #[test]
    fn test_retry_budget() {
        let policy = RetryPolicy::default();
        assert!(policy.should_retry(0));
        assert!(policy.should_retry(6));
        assert!(!policy.should_retry(7));
        assert!(!RetryPolicy::none().should_retry(0));
    }

    #[test]
    fn test_retryable_statuses() {
        for status in [429, 500, 502, 503, 504] {
            assert!(RetryPolicy::is_retryable(status));
        }
        assert!(!RetryPolicy::is_retryable(400));
        assert!(!RetryPolicy::is_retryable(404));
    }
}
