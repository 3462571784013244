//! Time window model.
//!
//! Exam windows and committed reservations are wall-clock intervals on a
//! local calendar. No time zone is attached; the consumer decides what the
//! clock means.
//!
//! # Overlap
//! Windows are half-open `[start, end)`. Two windows overlap iff
//! `a.start < b.end && a.end > b.start`, so back-to-back windows that only
//! touch at a boundary do not conflict.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// A time interval `[start, end)`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct TimeWindow {
    /// Interval start (inclusive).
    pub start: NaiveDateTime,
    /// Interval end (exclusive).
    pub end: NaiveDateTime,
}

impl TimeWindow {
    /// Creates a new time window.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Creates a window on `date` from `start` lasting `duration`.
    pub fn on(date: NaiveDate, start: NaiveTime, duration: Duration) -> Self {
        let start = date.and_time(start);
        Self::new(start, start + duration)
    }

    /// Length of the window.
    #[inline]
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Calendar date the window starts on.
    #[inline]
    pub fn date(&self) -> NaiveDate {
        self.start.date()
    }

    /// Whether an instant falls within this window.
    #[inline]
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        instant >= self.start && instant < self.end
    }

    /// Whether two windows overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && self.end > other.start
    }

    /// Whether this window overlaps any of `others`.
    pub fn overlaps_any<'a>(&self, others: impl IntoIterator<Item = &'a TimeWindow>) -> bool {
        others.into_iter().any(|w| self.overlaps(w))
    }
}
