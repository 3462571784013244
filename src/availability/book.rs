//! In-memory committed schedule.

use std::collections::HashMap;

use log::debug;

use super::{CommittedSchedule, SlotSink};
use crate::error::Result;
use crate::models::{GeneratedSlot, TimeWindow};

/// Room reservations and teacher commitments held in memory.
///
/// Serves as both the read side ([`CommittedSchedule`]) and the write side
/// ([`SlotSink`]) of the committed store, so slots persisted by one run are
/// visible to every later run that reads the same book.
#[derive(Debug, Clone, Default)]
pub struct ScheduleBook {
    rooms: HashMap<String, Vec<TimeWindow>>,
    teachers: HashMap<String, Vec<TimeWindow>>,
    persisted_slots: usize,
}

impl ScheduleBook {
    /// Creates an empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a room reservation.
    pub fn reserve_room(&mut self, room_id: impl Into<String>, window: TimeWindow) {
        self.rooms.entry(room_id.into()).or_default().push(window);
    }

    /// Records a teacher commitment.
    pub fn commit_teacher(&mut self, teacher_id: impl Into<String>, window: TimeWindow) {
        self.teachers.entry(teacher_id.into()).or_default().push(window);
    }

    /// Adds a room reservation (builder form).
    pub fn with_room_reservation(mut self, room_id: impl Into<String>, window: TimeWindow) -> Self {
        self.reserve_room(room_id, window);
        self
    }

    /// Adds a teacher commitment (builder form).
    pub fn with_teacher_commitment(
        mut self,
        teacher_id: impl Into<String>,
        window: TimeWindow,
    ) -> Self {
        self.commit_teacher(teacher_id, window);
        self
    }

    /// Number of slots persisted into this book.
    pub fn persisted_slot_count(&self) -> usize {
        self.persisted_slots
    }
}

impl CommittedSchedule for ScheduleBook {
    fn room_reservations(&self, room_id: &str) -> Vec<TimeWindow> {
        self.rooms.get(room_id).cloned().unwrap_or_default()
    }

    fn teacher_commitments(&self, teacher_id: &str) -> Vec<TimeWindow> {
        self.teachers.get(teacher_id).cloned().unwrap_or_default()
    }
}

impl SlotSink for ScheduleBook {
    fn persist(&mut self, slot: &GeneratedSlot) -> Result<()> {
        let window = slot.window();
        for room in &slot.rooms {
            self.reserve_room(room.room_id.clone(), window);
        }
        for proctor in &slot.proctors {
            self.commit_teacher(proctor.teacher_id.clone(), window);
        }
        self.persisted_slots += 1;
        debug!(
            "persisted slot {} {}-{} ({} rooms)",
            slot.date,
            slot.start_time,
            slot.end_time,
            slot.rooms.len()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ProctorAssignment, Room, RoomAssignment, Student, Teacher};
    use chrono::{Duration, NaiveDate, NaiveTime};

    #[test]
    fn test_persist_records_rooms_and_proctors() {
        let window = TimeWindow::on(
            NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
            NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            Duration::minutes(60),
        );
        let mut slot = GeneratedSlot::new(&window);
        slot.rooms
            .push(RoomAssignment::new(&Room::new("A", 5), vec![Student::new("S1")]));
        slot.proctors
            .push(ProctorAssignment::new(&Teacher::new("T1")).with_room("A"));

        let mut book = ScheduleBook::new();
        book.persist(&slot).unwrap();

        assert_eq!(book.room_reservations("A"), vec![window]);
        assert_eq!(book.teacher_commitments("T1"), vec![window]);
        assert!(book.room_reservations("B").is_empty());
        assert_eq!(book.persisted_slot_count(), 1);
    }

    #[test]
    fn test_builder_reservations() {
        let window = TimeWindow::on(
            NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
            NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            Duration::minutes(60),
        );
        let book = ScheduleBook::new()
            .with_room_reservation("A", window)
            .with_teacher_commitment("T1", window);
        assert_eq!(book.room_reservations("A").len(), 1);
        assert_eq!(book.teacher_commitments("T1").len(), 1);
        assert_eq!(book.persisted_slot_count(), 0);
    }
}
