//! Testability ports for injecting time and randomness.

use chrono::{DateTime, Utc};

// =============================================================================
// Testability Ports
// =============================================================================

#[cfg_attr(test, mockall::automock)]
pub trait ClockPort: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Source of dice faces.
#[cfg_attr(test, mockall::automock)]
pub trait RandomPort: Send + Sync {
    /// Uniform integer in `min..=max`.
    fn gen_range(&self, min: i32, max: i32) -> i32;
}

/// Adapt a `RandomPort` to the range-generator closure the rules engine takes.
pub fn range_fn(random: &dyn RandomPort) -> impl FnMut(i32, i32) -> i32 + '_ {
    move |min, max| random.gen_range(min, max)
}
