//! Query pacing
//!
//! Upstream calls are spaced by a fixed minimum interval, not an
//! adaptive limiter. The pacer is injected into the scanner (and the
//! multi-section report loops) so tests can disable it and run without
//! real sleeps.

use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::debug;

/// Minimum delay between consecutive queries within a category scan
pub const QUERY_INTERVAL_MS: u64 = 200;

/// Minimum delay between category scans in a multi-category report
pub const CATEGORY_INTERVAL_MS: u64 = 500;

/// Enforces a minimum interval between calls.
///
/// Each caller reserves the next available slot before releasing the
/// lock, so concurrent callers never collapse onto the same slot.
#[derive(Debug)]
pub struct Pacer {
    /// Next available slot, in milliseconds since `epoch`
    next_available_ms: Mutex<u64>,
    epoch: Instant,
    min_interval: Duration,
}

impl Pacer {
    /// Create a pacer with the given minimum interval between calls
    pub fn new(min_interval_ms: u64) -> Self {
        Self {
            next_available_ms: Mutex::new(0), // First call can go immediately
            epoch: Instant::now(),
            min_interval: Duration::from_millis(min_interval_ms),
        }
    }

    /// A pacer that never waits (tests)
    pub fn disabled() -> Self {
        Self::new(0)
    }

    /// Wait until the next slot is available, then claim it
    pub async fn acquire(&self) {
        let now_ms = self.epoch.elapsed().as_millis() as u64;

        let wait_until = {
            let mut next_available = self.next_available_ms.lock().await;
            if now_ms >= *next_available {
                *next_available = now_ms + self.min_interval.as_millis() as u64;
                None
            } else {
                let slot = *next_available;
                *next_available = slot + self.min_interval.as_millis() as u64;
                Some(self.epoch + Duration::from_millis(slot))
            }
            // Lock released here; the wait happens outside it
        };

        if let Some(target) = wait_until {
            let wait = target.saturating_duration_since(Instant::now());
            if !wait.is_zero() {
                debug!("Pacing: sleeping {:?}", wait);
                tokio::time::sleep(wait).await;
            }
        }
    }

    /// The configured minimum interval
    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }
}
