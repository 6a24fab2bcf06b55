//! Timing - Budgets, outcomes and minute/second/millisecond breakdown
//!
//! Every sort and search returns a small outcome value carrying its elapsed
//! wall-clock time. Sorts additionally carry a completion flag so a budget
//! abort travels back to the caller as data instead of an error.

use std::fmt;
use std::time::Duration;

use crate::core_types::FoundCount;

// ============================================================
// TIME BUDGET
// ============================================================

/// Upper bound on how long a sort may run before it gives up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeBudget {
    limit: Duration,
}

impl TimeBudget {
    pub fn new(limit: Duration) -> Self {
        Self { limit }
    }

    /// Budget derived from a baseline measurement: `factor × reference`
    pub fn from_reference(reference: Duration, factor: u32) -> Self {
        Self {
            limit: reference.saturating_mul(factor),
        }
    }

    /// Budget that never runs out in practice
    pub fn unlimited() -> Self {
        Self {
            limit: Duration::MAX,
        }
    }

    #[inline]
    pub fn limit(&self) -> Duration {
        self.limit
    }

    /// A zero budget is exceeded at the first check point.
    #[inline]
    pub fn is_exceeded(&self, elapsed: Duration) -> bool {
        elapsed >= self.limit
    }
}

// ============================================================
// OUTCOMES
// ============================================================

/// Result of a time-boxed sort
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOutcome {
    pub finished: bool,
    pub elapsed: Duration,
}

impl SortOutcome {
    pub fn finished(elapsed: Duration) -> Self {
        Self {
            finished: true,
            elapsed,
        }
    }

    pub fn aborted(elapsed: Duration) -> Self {
        Self {
            finished: false,
            elapsed,
        }
    }
}

/// Result of searching every query once
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    pub found: FoundCount,
    pub elapsed: Duration,
}

/// Full result of one strategy run: preparation (sort or index build) plus search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchReport {
    /// False when the preparation step gave up and linear search was used instead
    pub sorted: bool,
    pub found: FoundCount,
    pub search_time: Duration,
    pub prepare_time: Duration,
}

impl SearchReport {
    /// Baseline report: no preparation step, nothing sorted
    pub fn unprepared(outcome: SearchOutcome) -> Self {
        Self {
            sorted: false,
            found: outcome.found,
            search_time: outcome.elapsed,
            prepare_time: Duration::ZERO,
        }
    }

    #[inline]
    pub fn total_time(&self) -> Duration {
        self.search_time + self.prepare_time
    }
}

// ============================================================
// BREAKDOWN
// ============================================================

/// Duration split into whole minutes, seconds and milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeBreakdown {
    pub min: u64,
    pub sec: u64,
    pub ms: u64,
}

impl TimeBreakdown {
    pub fn from_millis(millis: u64) -> Self {
        let min = millis / 60_000;
        let rest = millis - min * 60_000;
        Self {
            min,
            sec: rest / 1000,
            ms: rest % 1000,
        }
    }

    /// Sub-millisecond remainders are truncated
    pub fn from_duration(duration: Duration) -> Self {
        Self::from_millis(as_millis(duration))
    }
}

impl fmt::Display for TimeBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} min. {} sec. {} ms.", self.min, self.sec, self.ms)
    }
}

/// Whole milliseconds, saturating at `u64::MAX`
#[inline]
pub fn as_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
