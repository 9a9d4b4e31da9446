//! Exponential backoff with jitter.

use rand::Rng;
use std::time::Duration;

/// Calculate exponential backoff delay with jitter.
///
/// `attempt` is the number of the attempt that just failed; the first retry
/// waits `base_ms`, each further retry doubles the delay up to `max_ms`.
pub fn calculate_backoff(attempt: u32, base_ms: u64, max_ms: u64) -> Duration {
    if attempt == 0 {
        return Duration::from_millis(0);
    }

    let exponential_base = 2u64.saturating_pow(attempt - 1);
    let delay_ms = base_ms.saturating_mul(exponential_base);
    let capped_delay = delay_ms.min(max_ms);

    // Apply jitter (0 to 10% of the delay)
    let jitter_range = capped_delay / 10;
    let jitter = if jitter_range > 0 {
        rand::thread_rng().gen_range(0..jitter_range)
    } else {
        0
    };

    Duration::from_millis(capped_delay + jitter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backoff_doubles_per_attempt() {
        let b1 = calculate_backoff(1, 30_000, 180_000);
        assert!(b1.as_millis() >= 30_000);

        let b2 = calculate_backoff(2, 30_000, 180_000);
        assert!(b2.as_millis() >= 60_000);

        let b3 = calculate_backoff(3, 30_000, 180_000);
        assert!(b3.as_millis() >= 120_000);
    }

    #[test]
    fn test_backoff_saturates_at_cap() {
        let max = calculate_backoff(10, 30_000, 180_000);
        assert!(max.as_millis() >= 180_000);
        // Jitter adds at most 10% on top of the cap
        assert!(max.as_millis() <= 198_000);
    }
}
