//! Fixed-delay throttle between comment-listing requests.
//!
//! Multi-video collection is deliberately sequential: one identifier in
//! flight at a time with a brief pause between invocations, so the external
//! service never sees a burst. The pause lives in its own type (rather than
//! a bare `sleep` inside the collection loop) so tests can inject a zero
//! delay or run under paused tokio time.

use std::time::Duration;

use tokio::time::sleep;

/// A fixed pause inserted between successive collection invocations.
#[derive(Debug, Clone, Copy)]
pub struct FixedDelay {
    delay: Duration,
}

impl FixedDelay {
    /// The production delay between fetches (~100 ms).
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(100);

    /// Creates a throttle with the given delay.
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Creates a no-op throttle. Intended for tests.
    pub fn none() -> Self {
        Self::new(Duration::ZERO)
    }

    /// Waits for the configured delay. Returns immediately for zero delay.
    pub async fn pause(&self) {
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }
    }
}

impl Default for FixedDelay {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn pause_waits_the_configured_delay() {
        let start = tokio::time::Instant::now();
        FixedDelay::new(Duration::from_millis(100)).pause().await;
        assert_eq!(start.elapsed(), Duration::from_millis(100));
    }

    #[tokio::test(start_paused = true)]
    async fn zero_delay_does_not_sleep() {
        let start = tokio::time::Instant::now();
        FixedDelay::none().pause().await;
        assert_eq!(start.elapsed(), Duration::ZERO);
    }
}
