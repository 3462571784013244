//! Exam schedule (solution) model.
//!
//! The result of one generation run: the ordered list of generated slots,
//! any students the run could not place, and why the run stopped. An
//! incomplete schedule is a valid result, not an error; the caller decides
//! whether partial placement is acceptable.

use serde::{Deserialize, Serialize};

use super::{GeneratedSlot, RoomAssignment, Student};

/// Why a generation run stopped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Termination {
    /// Every student was placed.
    #[default]
    Complete,
    /// The day or iteration horizon was reached with students left over.
    HorizonExhausted,
}

/// A generated exam schedule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamSchedule {
    /// Generated slots, in chronological order.
    pub slots: Vec<GeneratedSlot>,
    /// Students left in the queue when the run stopped.
    pub unplaced_students: Vec<Student>,
    /// How the run ended.
    pub termination: Termination,
}

impl ExamSchedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a slot.
    pub fn add_slot(&mut self, slot: GeneratedSlot) {
        self.slots.push(slot);
    }

    /// Whether every student was placed.
    pub fn is_complete(&self) -> bool {
        self.termination == Termination::Complete && self.unplaced_students.is_empty()
    }

    /// Number of slots.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Number of room assignments across all slots.
    pub fn room_assignment_count(&self) -> usize {
        self.slots.iter().map(|s| s.rooms.len()).sum()
    }

    /// Number of seated students across all slots.
    pub fn placed_student_count(&self) -> usize {
        self.slots.iter().map(GeneratedSlot::student_count).sum()
    }

    /// Iterates over every room assignment in slot order.
    pub fn room_assignments(&self) -> impl Iterator<Item = &RoomAssignment> {
        self.slots.iter().flat_map(|s| s.rooms.iter())
    }

    /// Slots in which a room is used.
    pub fn slots_for_room(&self, room_id: &str) -> Vec<&GeneratedSlot> {
        self.slots
            .iter()
            .filter(|s| s.room(room_id).is_some())
            .collect()
    }

    /// Slots a teacher proctors.
    pub fn slots_for_proctor(&self, teacher_id: &str) -> Vec<&GeneratedSlot> {
        self.slots
            .iter()
            .filter(|s| s.proctors.iter().any(|p| p.teacher_id == teacher_id))
            .collect()
    }

    /// Finds the slot and room a student is seated in.
    pub fn assignment_for_student(&self, code: &str) -> Option<(&GeneratedSlot, &RoomAssignment)> {
        self.slots.iter().find_map(|slot| {
            slot.rooms
                .iter()
                .find(|r| r.students.iter().any(|s| s.code == code))
                .map(|r| (slot, r))
        })
    }
}
