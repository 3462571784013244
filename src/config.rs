//! Scheduler configuration.
//!
//! Bounds the driving loop. The cursor has no natural end, so a run over
//! rooms that never open would spin forever; the horizon turns that into a
//! [`Termination::HorizonExhausted`](crate::models::Termination) result.

use serde::{Deserialize, Serialize};

/// Default number of calendar days the cursor may advance past the start date.
pub const DEFAULT_MAX_DAYS: u32 = 366;

/// Default number of windows the driving loop may examine.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100_000;

/// Run-level limits and calendar options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SchedulerConfig {
    /// Calendar days the cursor may advance past the start date.
    pub max_days: u32,
    /// Windows the driving loop may examine.
    pub max_iterations: u32,
    /// Skip Saturdays and Sundays when advancing to the next day.
    pub skip_weekends: bool,
}

impl SchedulerConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the day horizon.
    pub fn with_max_days(mut self, max_days: u32) -> Self {
        self.max_days = max_days;
        self
    }

    /// Sets the iteration cap.
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Enables or disables weekend skipping.
    pub fn with_skip_weekends(mut self, skip: bool) -> Self {
        self.skip_weekends = skip;
        self
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            max_days: DEFAULT_MAX_DAYS,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            skip_weekends: false,
        }
    }
}
