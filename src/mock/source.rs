//! Randomness and time sources for the mock generators

use chrono::{DateTime, FixedOffset, Local, SubsecRound};
use rand::Rng;

// ============================================================================
// RANDOM SOURCE
// ============================================================================

/// Uniform random draws
///
/// Must be safe to share between request handlers.
pub trait RandomSource: Send + Sync {
    /// Draw a float uniformly from `[low, high)`
    fn uniform(&self, low: f64, high: f64) -> f64;

    /// Draw an integer uniformly from `[low, high]`
    fn int_inclusive(&self, low: i64, high: i64) -> i64 {
        let span = (high - low + 1) as f64;
        let offset = self.uniform(0.0, span).floor() as i64;
        (low + offset).clamp(low, high)
    }

    /// Draw an index uniformly from `[0, len)`
    fn index(&self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.int_inclusive(0, len as i64 - 1) as usize
    }
}

/// Production source backed by the thread-local RNG
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn uniform(&self, low: f64, high: f64) -> f64 {
        if low >= high {
            return low;
        }
        rand::thread_rng().gen_range(low..high)
    }

    fn int_inclusive(&self, low: i64, high: i64) -> i64 {
        if low >= high {
            return low;
        }
        rand::thread_rng().gen_range(low..=high)
    }
}

// ============================================================================
// CLOCK
// ============================================================================

/// Current time, with the offset timestamps are rendered in
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Wall clock in the local timezone, microsecond precision
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset().trunc_subsecs(6)
    }
}

// ============================================================================
// TEST DOUBLES
// ============================================================================

#[cfg(test)]
pub use doubles::{FixedClock, ScriptedRandom};
