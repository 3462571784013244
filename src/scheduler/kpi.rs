//! Exam schedule quality metrics (KPIs).
//!
//! Computes placement, seat usage, and staffing balance from a generated
//! schedule.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Slot count | Number of generated slots |
//! | Exam days | Distinct dates with at least one slot |
//! | Seat utilization | Mean of seated/capacity over room assignments |
//! | Proctor load | Slots proctored per teacher |
//! | Proctor spread | max − min load over teachers who proctored |
//! | Grader load | Rooms graded per teacher |
//! | Unstaffed rooms | Room assignments with no paired proctor |

use std::collections::{BTreeSet, HashMap};

use crate::models::ExamSchedule;

/// Exam schedule performance indicators.
#[derive(Debug, Clone)]
pub struct ScheduleKpi {
    /// Number of generated slots.
    pub slot_count: usize,
    /// Distinct exam dates.
    pub exam_days: usize,
    /// Students seated.
    pub placed_students: usize,
    /// Students left unplaced.
    pub unplaced_students: usize,
    /// Mean seat utilization over room assignments (0.0..1.0).
    pub avg_seat_utilization: f64,
    /// Slots proctored per teacher.
    pub proctor_load: HashMap<String, usize>,
    /// Rooms graded per teacher.
    pub grader_load: HashMap<String, usize>,
    /// Largest minus smallest proctor load among teachers who proctored.
    pub proctor_load_spread: usize,
    /// Room assignments with no paired proctor.
    pub unstaffed_rooms: usize,
}

impl ScheduleKpi {
    /// Computes KPIs from a generated schedule.
    pub fn calculate(schedule: &ExamSchedule) -> Self {
        let exam_days: BTreeSet<_> = schedule.slots.iter().map(|s| s.date).collect();

        let mut utilization_sum = 0.0;
        let mut counted_rooms: usize = 0;
        for room in schedule.room_assignments() {
            if room.capacity > 0 {
                utilization_sum += room.student_count() as f64 / f64::from(room.capacity);
                counted_rooms += 1;
            }
        }
        let avg_seat_utilization = if counted_rooms == 0 {
            0.0
        } else {
            utilization_sum / counted_rooms as f64
        };

        let mut proctor_load: HashMap<String, usize> = HashMap::new();
        let mut grader_load: HashMap<String, usize> = HashMap::new();
        let mut unstaffed_rooms = 0;
        for slot in &schedule.slots {
            for p in &slot.proctors {
                *proctor_load.entry(p.teacher_id.clone()).or_insert(0) += 1;
            }
            for g in &slot.graders {
                *grader_load.entry(g.teacher_id.clone()).or_insert(0) += 1;
            }
            unstaffed_rooms += slot.unstaffed_rooms().len();
        }

        let proctor_load_spread = match (proctor_load.values().max(), proctor_load.values().min()) {
            (Some(max), Some(min)) => max - min,
            _ => 0,
        };

        Self {
            slot_count: schedule.slot_count(),
            exam_days: exam_days.len(),
            placed_students: schedule.placed_student_count(),
            unplaced_students: schedule.unplaced_students.len(),
            avg_seat_utilization,
            proctor_load,
            grader_load,
            proctor_load_spread,
            unstaffed_rooms,
        }
    }

    /// Whether every room is staffed and proctor loads differ by at most `max_spread`.
    pub fn is_balanced(&self, max_spread: usize) -> bool {
        self.unstaffed_rooms == 0 && self.proctor_load_spread <= max_spread
    }
}
