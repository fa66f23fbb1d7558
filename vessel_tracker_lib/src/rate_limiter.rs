//! Minimum-interval pacing for outbound AIS Hub requests.
//!
//! The free AIS Hub tier allows roughly 100 requests per hour, so every
//! request, from any caller, is spaced at least `min_interval` after the
//! previous one (default 600 ms).

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use serde::Serialize;
use tokio::sync::Mutex;
use tokio::time::{sleep_until, Instant};

/// Default spacing between consecutive requests.
pub const DEFAULT_MIN_INTERVAL: Duration = Duration::from_millis(600);

/// Paces requests so that no two start closer together than `min_interval`.
///
/// Each caller reserves the next free slot while holding the lock and only
/// then sleeps, so concurrent callers line up one interval apart instead of
/// all waking together after the same delay.
pub struct RateLimiter {
    /// Start time of the most recently reserved request slot.
    last_slot: Mutex<Option<Instant>>,
    min_interval: Duration,
    tracker: RequestTracker,
}

impl RateLimiter {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            last_slot: Mutex::new(None),
            min_interval,
            tracker: RequestTracker::default(),
        }
    }

    /// Wait until this caller's request slot arrives.
    ///
    /// The slot is recorded before sleeping. There is no queue limit and a
    /// started wait cannot be cancelled short of dropping the future.
    pub async fn acquire(&self) {
        let slot = {
            let mut last = self.last_slot.lock().await;
            let now = Instant::now();
            let slot = match *last {
                Some(prev) => (prev + self.min_interval).max(now),
                None => now,
            };
            *last = Some(slot);
            slot
        };

        if slot > Instant::now() {
            tracing::debug!(
                "Rate limiting: waiting {:.0}ms before next request",
                (slot - Instant::now()).as_secs_f64() * 1000.0
            );
            sleep_until(slot).await;
        }
    }

    /// Access the request tracker for recording outcomes.
    pub fn tracker(&self) -> &RequestTracker {
        &self.tracker
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_INTERVAL)
    }
}

/// Outcome counts for remote calls. The number made is derived from the
/// two outcome counters, so a snapshot is always internally consistent.
#[derive(Default)]
pub struct RequestTracker {
    succeeded: AtomicU64,
    failed: AtomicU64,
}

impl RequestTracker {
    /// Count one finished call by its outcome.
    pub fn record<T, E>(&self, result: &Result<T, E>) {
        let counter = if result.is_ok() {
            &self.succeeded
        } else {
            &self.failed
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn summary(&self) -> TrackerSummary {
        let requests_succeeded = self.succeeded.load(Ordering::Relaxed);
        let requests_failed = self.failed.load(Ordering::Relaxed);
        TrackerSummary {
            requests_made: requests_succeeded + requests_failed,
            requests_succeeded,
            requests_failed,
        }
    }
}

/// Immutable snapshot of tracker counters for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackerSummary {
    pub requests_made: u64,
    pub requests_succeeded: u64,
    pub requests_failed: u64,
}
