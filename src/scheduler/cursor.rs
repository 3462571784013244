//! Time window cursor.
//!
//! Walks exam windows through the day: each window lasts the exam duration
//! and the next one starts after the exam plus the relaxation break. When
//! the next exam would run past the end of the day, the cursor moves to the
//! next day's start time.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

use crate::models::TimeWindow;

/// Daily timing parameters of an exam session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExamTiming {
    /// First exam day.
    pub start_date: NaiveDate,
    /// Earliest exam start each day.
    pub daily_start: NaiveTime,
    /// Latest exam end each day.
    pub daily_end: NaiveTime,
    /// Length of one exam.
    pub exam_duration: Duration,
    /// Break between consecutive exams.
    pub relaxation: Duration,
}

impl ExamTiming {
    /// Creates timing with durations in minutes.
    pub fn new(
        start_date: NaiveDate,
        daily_start: NaiveTime,
        daily_end: NaiveTime,
        exam_minutes: u32,
        relaxation_minutes: u32,
    ) -> Self {
        Self {
            start_date,
            daily_start,
            daily_end,
            exam_duration: Duration::minutes(i64::from(exam_minutes)),
            relaxation: Duration::minutes(i64::from(relaxation_minutes)),
        }
    }

    /// Exam duration plus relaxation break.
    #[inline]
    pub fn slot_duration(&self) -> Duration {
        self.exam_duration + self.relaxation
    }

    /// Whether at least one exam fits in the daily window.
    pub fn fits_in_day(&self) -> bool {
        let day_start = self.start_date.and_time(self.daily_start);
        let day_end = self.start_date.and_time(self.daily_end);
        self.exam_duration > Duration::zero() && day_start + self.exam_duration <= day_end
    }
}

/// Cursor over exam windows across days.
#[derive(Debug, Clone)]
pub struct TimeWindowCursor {
    timing: ExamTiming,
    current_day: NaiveDate,
    next_start: NaiveDateTime,
    skip_weekends: bool,
}

impl TimeWindowCursor {
    /// Creates a cursor positioned at the first day's start time.
    pub fn new(timing: ExamTiming) -> Self {
        Self {
            timing,
            current_day: timing.start_date,
            next_start: timing.start_date.and_time(timing.daily_start),
            skip_weekends: false,
        }
    }

    /// Skips Saturdays and Sundays, including a weekend start date.
    pub fn with_skip_weekends(mut self, skip: bool) -> Self {
        self.skip_weekends = skip;
        if skip && is_weekend(self.current_day) {
            self.move_to_day(next_weekday(self.current_day));
        }
        self
    }

    /// Day the cursor is on.
    pub fn current_day(&self) -> NaiveDate {
        self.current_day
    }

    /// Calendar days between the start date and the current day.
    pub fn days_elapsed(&self) -> i64 {
        (self.current_day - self.timing.start_date).num_days()
    }

    /// Returns the next exam window and advances past it.
    ///
    /// Returns `None` only when no exam can ever fit in the daily window.
    pub fn next_window(&mut self) -> Option<TimeWindow> {
        if !self.timing.fits_in_day() {
            return None;
        }
        loop {
            let day_end = self.current_day.and_time(self.timing.daily_end);
            let end = self.next_start + self.timing.exam_duration;
            if self.next_start.date() == self.current_day && end <= day_end {
                let window = TimeWindow::new(self.next_start, end);
                self.next_start += self.timing.slot_duration();
                return Some(window);
            }
            self.advance_day();
        }
    }

    fn advance_day(&mut self) {
        let mut day = self.current_day + Duration::days(1);
        if self.skip_weekends && is_weekend(day) {
            day = next_weekday(day);
        }
        self.move_to_day(day);
    }

    fn move_to_day(&mut self, day: NaiveDate) {
        self.current_day = day;
        self.next_start = day.and_time(self.timing.daily_start);
    }
}

fn is_weekend(day: NaiveDate) -> bool {
    matches!(day.weekday(), Weekday::Sat | Weekday::Sun)
}

fn next_weekday(mut day: NaiveDate) -> NaiveDate {
    while is_weekend(day) {
        day += Duration::days(1);
    }
    day
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    // 2024-06-03 is a Monday.
    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 3).unwrap()
    }

    #[test]
    fn test_windows_within_day() {
        let timing = ExamTiming::new(monday(), time(8, 0), time(11, 0), 60, 15);
        let mut cursor = TimeWindowCursor::new(timing);

        let w1 = cursor.next_window().unwrap();
        assert_eq!(w1.start, monday().and_time(time(8, 0)));
        assert_eq!(w1.end, monday().and_time(time(9, 0)));

        let w2 = cursor.next_window().unwrap();
        assert_eq!(w2.start, monday().and_time(time(9, 15)));
        assert_eq!(w2.end, monday().and_time(time(10, 15)));

        // 10:30 + 60 > 11:00 → next day
        let w3 = cursor.next_window().unwrap();
        let tuesday = monday() + Duration::days(1);
        assert_eq!(w3.start, tuesday.and_time(time(8, 0)));
        assert_eq!(cursor.days_elapsed(), 1);
    }

    #[test]
    fn test_exam_ending_exactly_at_day_end() {
        let timing = ExamTiming::new(monday(), time(8, 0), time(10, 0), 60, 0);
        let mut cursor = TimeWindowCursor::new(timing);
        cursor.next_window().unwrap();
        let w2 = cursor.next_window().unwrap();
        assert_eq!(w2.end, monday().and_time(time(10, 0)));
        assert_eq!(cursor.current_day(), monday());
    }

    #[test]
    fn test_windows_never_overlap() {
        let timing = ExamTiming::new(monday(), time(7, 0), time(17, 0), 50, 5);
        let mut cursor = TimeWindowCursor::new(timing);
        let windows: Vec<_> = (0..40).map(|_| cursor.next_window().unwrap()).collect();
        for pair in windows.windows(2) {
            assert!(pair[0].end <= pair[1].start);
        }
    }

    #[test]
    fn test_late_day_does_not_wrap_past_midnight() {
        let timing = ExamTiming::new(monday(), time(20, 0), time(23, 30), 120, 60);
        let mut cursor = TimeWindowCursor::new(timing);
        let w1 = cursor.next_window().unwrap();
        assert_eq!(w1.start, monday().and_time(time(20, 0)));
        // 23:00 + 120 min crosses midnight → next day 20:00
        let w2 = cursor.next_window().unwrap();
        let tuesday = monday() + Duration::days(1);
        assert_eq!(w2.start, tuesday.and_time(time(20, 0)));
    }

    #[test]
    fn test_exam_longer_than_day() {
        let timing = ExamTiming::new(monday(), time(8, 0), time(9, 0), 90, 0);
        let mut cursor = TimeWindowCursor::new(timing);
        assert!(cursor.next_window().is_none());
    }

    #[test]
    fn test_zero_duration_yields_nothing() {
        let timing = ExamTiming::new(monday(), time(8, 0), time(9, 0), 0, 0);
        assert!(!timing.fits_in_day());
        assert!(TimeWindowCursor::new(timing).next_window().is_none());
    }

    #[test]
    fn test_skip_weekends() {
        let friday = monday() + Duration::days(4);
        let timing = ExamTiming::new(friday, time(8, 0), time(9, 0), 60, 0);
        let mut cursor = TimeWindowCursor::new(timing).with_skip_weekends(true);

        assert_eq!(cursor.next_window().unwrap().date(), friday);
        let next = cursor.next_window().unwrap();
        assert_eq!(next.date().weekday(), Weekday::Mon);
        assert_eq!(cursor.days_elapsed(), 3);
    }

    #[test]
    fn test_weekend_start_date_skipped() {
        let saturday = monday() + Duration::days(5);
        let timing = ExamTiming::new(saturday, time(8, 0), time(9, 0), 60, 0);
        let mut cursor = TimeWindowCursor::new(timing).with_skip_weekends(true);
        assert_eq!(cursor.next_window().unwrap().date().weekday(), Weekday::Mon);
    }

    #[test]
    fn test_calendar_days_by_default() {
        let friday = monday() + Duration::days(4);
        let timing = ExamTiming::new(friday, time(8, 0), time(9, 0), 60, 0);
        let mut cursor = TimeWindowCursor::new(timing);
        cursor.next_window().unwrap();
        assert_eq!(cursor.next_window().unwrap().date().weekday(), Weekday::Sat);
    }
}
