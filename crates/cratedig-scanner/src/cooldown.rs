//! Cooldown gate for scan-triggered lookups.
//!
//! The gate is a rate limiter, not a dedup filter: once it fires, every
//! trigger inside the interval is rejected regardless of content.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Interval between two accepted triggers, in milliseconds.
pub const DEFAULT_COOLDOWN_MS: u64 = 5000;

const NEVER_FIRED: u64 = u64::MAX;

/// Millisecond wall clock, injectable for tests.
pub trait Clock: Send + Sync {
    fn now_millis(&self) -> u64;
}

/// [`Clock`] backed by [`SystemTime`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| {
                u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX - 1)
            })
    }
}

/// Holds the last accepted trigger time and the fixed interval.
///
/// `try_fire` is a single compare-and-swap, so decode callbacks delivered
/// from several threads cannot both pass for the same window.
#[derive(Debug)]
pub struct CooldownGate {
    last_fired_ms: AtomicU64,
    interval_ms: u64,
}

impl Default for CooldownGate {
    fn default() -> Self {
        Self::new(DEFAULT_COOLDOWN_MS)
    }
}

impl CooldownGate {
    /// Creates a gate that has never fired.
    #[must_use]
    pub fn new(interval_ms: u64) -> Self {
        Self {
            last_fired_ms: AtomicU64::new(NEVER_FIRED),
            interval_ms,
        }
    }

    #[must_use]
    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Timestamp of the last accepted trigger, `None` before the first one.
    #[must_use]
    pub fn last_fired(&self) -> Option<u64> {
        match self.last_fired_ms.load(Ordering::Acquire) {
            NEVER_FIRED => None,
            ts => Some(ts),
        }
    }

    /// Returns `true` and records `now_ms` if more than the interval has
    /// passed since the last accepted trigger.
    ///
    /// A clock that moved backwards counts as zero elapsed time.
    pub fn try_fire(&self, now_ms: u64) -> bool {
        let mut last = self.last_fired_ms.load(Ordering::Acquire);
        loop {
            if last != NEVER_FIRED && now_ms.saturating_sub(last) <= self.interval_ms {
                return false;
            }
            match self.last_fired_ms.compare_exchange_weak(
                last,
                now_ms,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => return true,
                Err(actual) => last = actual,
            }
        }
    }
}
