//! Injectable time source.
//!
//! # Responsibilities
//! - Provide "now" to the status transition logic
//! - Allow tests to advance time without sleeping
//!
//! # Design Decisions
//! - Trait object behind `Arc` so the store stays `Clone`-friendly
//! - `Instant` (monotonic) rather than wall-clock; nothing here needs
//!   calendar time and monotonic cannot go backwards

use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Source of the current time for status transitions.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// Production clock backed by `Instant::now`.
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Manually advanced clock for tests.
///
/// Starts at the real current instant and only moves when `advance` is
/// called, so assertions on both sides of the processing delay need no
/// real waiting.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<Instant>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Mutex::new(Instant::now()),
        }
    }

    /// Move the clock forward by the given duration.
    pub fn advance(&self, by: Duration) {
        *self.now.lock().unwrap() += by;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        *self.now.lock().unwrap()
    }
}
