use std::time::Duration;
use tokio::time::sleep;

/// Enforces a fixed pause between successive calls of one batch.
/// The first call of a batch goes out immediately.
pub struct RateLimiter {
    pause: Duration,
    calls_in_batch: usize,
}

impl RateLimiter {
    pub fn new(pause_ms: u64) -> Self {
        Self {
            pause: Duration::from_millis(pause_ms),
            calls_in_batch: 0,
        }
    }

    pub async fn wait(&mut self) {
        if self.calls_in_batch > 0 && !self.pause.is_zero() {
            sleep(self.pause).await;
        }
        self.calls_in_batch += 1;
    }

    /// Start a new batch; the next call is not delayed
    pub fn reset(&mut self) {
        self.calls_in_batch = 0;
    }

    pub fn calls_in_batch(&self) -> usize {
        self.calls_in_batch
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[tokio::test]
    async fn test_first_call_is_not_delayed() {
        let mut limiter = RateLimiter::new(200);
        let started = Instant::now();
        limiter.wait().await;
        assert!(started.elapsed() < Duration::from_millis(200));
        assert_eq!(limiter.calls_in_batch(), 1);
    }

    #[tokio::test]
    async fn test_pause_between_calls() {
        let mut limiter = RateLimiter::new(30);
        limiter.wait().await;
        let started = Instant::now();
        limiter.wait().await;
        assert!(started.elapsed() >= Duration::from_millis(30));

        limiter.reset();
        assert_eq!(limiter.calls_in_batch(), 0);
    }
}
