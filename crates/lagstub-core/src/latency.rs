//! Simulated latency sampling
//!
//! Delays are drawn uniformly from a half-open millisecond interval,
//! `[100, 400)` by default. Sampling uses `rand`'s thread-local generator:
//! it is seeded once per thread and safe to hit from concurrent request
//! tasks, so there is no per-request reseeding and no shared generator
//! state to guard.

use rand::Rng;
use std::time::Duration;

/// Default lower bound of the injected delay, inclusive
pub const DEFAULT_MIN_MS: u64 = 100;

/// Default upper bound of the injected delay, exclusive
pub const DEFAULT_MAX_MS: u64 = 400;

/// Half-open `[min_ms, max_ms)` millisecond range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyRange {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl LatencyRange {
    /// Create a range; `min_ms` must be strictly below `max_ms`
    pub fn new(min_ms: u64, max_ms: u64) -> Self {
        debug_assert!(min_ms < max_ms);
        Self { min_ms, max_ms }
    }

    /// Draw a delay uniformly from the range
    pub fn sample(&self) -> u64 {
        rand::rng().random_range(self.min_ms..self.max_ms)
    }

    /// Draw a delay as a [`Duration`]
    pub fn sample_duration(&self) -> Duration {
        Duration::from_millis(self.sample())
    }
}

impl Default for LatencyRange {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_MS, DEFAULT_MAX_MS)
    }
}
