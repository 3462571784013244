//! Generated slot model.
//!
//! A slot is one exam window on one day in which one or more rooms host
//! students concurrently, together with the proctors supervising it and
//! the graders assigned to each room's papers.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::{Room, Student, Teacher, TimeWindow};

/// Students seated in one room for one slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomAssignment {
    /// Room ID.
    pub room_id: String,
    /// Room name (denormalized for display).
    pub room_name: String,
    /// Room capacity at assignment time.
    pub capacity: u32,
    /// Seated students, in queue order.
    pub students: Vec<Student>,
}

/// A proctor supervising a slot.
///
/// `room_id` is filled by order pairing: the i-th proctor returned by the
/// balancer supervises the i-th room assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProctorAssignment {
    /// Teacher ID.
    pub teacher_id: String,
    /// Teacher name.
    pub full_name: String,
    /// Paired room, if any.
    pub room_id: Option<String>,
}

/// A grader assigned to a room's submissions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraderAssignment {
    /// Room ID.
    pub room_id: String,
    /// Teacher ID.
    pub teacher_id: String,
    /// Teacher name.
    pub full_name: String,
}

/// One generated exam slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedSlot {
    /// Exam date.
    pub date: NaiveDate,
    /// Start time of day.
    pub start_time: NaiveTime,
    /// End time of day.
    pub end_time: NaiveTime,
    /// Rooms used in this slot, capacity-descending.
    pub rooms: Vec<RoomAssignment>,
    /// Proctors, in pairing order.
    pub proctors: Vec<ProctorAssignment>,
    /// Graders, one per room at most.
    pub graders: Vec<GraderAssignment>,
}

impl RoomAssignment {
    /// Creates an assignment for `room` with the given students.
    pub fn new(room: &Room, students: Vec<Student>) -> Self {
        Self {
            room_id: room.id.clone(),
            room_name: room.name.clone(),
            capacity: room.capacity,
            students,
        }
    }

    /// Number of seated students.
    #[inline]
    pub fn student_count(&self) -> usize {
        self.students.len()
    }

    /// Whether the assignment respects the room capacity.
    #[inline]
    pub fn within_capacity(&self) -> bool {
        self.students.len() <= self.capacity as usize
    }
}

impl ProctorAssignment {
    /// Creates an unpaired proctor assignment.
    pub fn new(teacher: &Teacher) -> Self {
        Self {
            teacher_id: teacher.id.clone(),
            full_name: teacher.full_name.clone(),
            room_id: None,
        }
    }

    /// Pairs the proctor with a room.
    pub fn with_room(mut self, room_id: impl Into<String>) -> Self {
        self.room_id = Some(room_id.into());
        self
    }
}

impl GraderAssignment {
    /// Creates a grader assignment.
    pub fn new(room_id: impl Into<String>, teacher: &Teacher) -> Self {
        Self {
            room_id: room_id.into(),
            teacher_id: teacher.id.clone(),
            full_name: teacher.full_name.clone(),
        }
    }
}

impl GeneratedSlot {
    /// Creates an empty slot covering `window`.
    pub fn new(window: &TimeWindow) -> Self {
        Self {
            date: window.start.date(),
            start_time: window.start.time(),
            end_time: window.end.time(),
            rooms: Vec::new(),
            proctors: Vec::new(),
            graders: Vec::new(),
        }
    }

    /// The slot's time window.
    pub fn window(&self) -> TimeWindow {
        TimeWindow::new(
            self.date.and_time(self.start_time),
            self.date.and_time(self.end_time),
        )
    }

    /// Total students seated in this slot.
    pub fn student_count(&self) -> usize {
        self.rooms.iter().map(RoomAssignment::student_count).sum()
    }

    /// Room assignment for a room, if the room is used in this slot.
    pub fn room(&self, room_id: &str) -> Option<&RoomAssignment> {
        self.rooms.iter().find(|r| r.room_id == room_id)
    }

    /// Grader for a room, if one was assigned.
    pub fn grader_for(&self, room_id: &str) -> Option<&GraderAssignment> {
        self.graders.iter().find(|g| g.room_id == room_id)
    }

    /// Proctor paired with a room, if any.
    pub fn proctor_for(&self, room_id: &str) -> Option<&ProctorAssignment> {
        self.proctors
            .iter()
            .find(|p| p.room_id.as_deref() == Some(room_id))
    }

    /// Rooms in this slot with no paired proctor.
    pub fn unstaffed_rooms(&self) -> Vec<&str> {
        self.rooms
            .iter()
            .map(|r| r.room_id.as_str())
            .filter(|id| self.proctor_for(id).is_none())
            .collect()
    }
}
