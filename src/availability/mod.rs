//! Committed-schedule seam and room availability checks.
//!
//! Reservations made by earlier runs live outside the scheduler. The
//! scheduler only reads them through [`CommittedSchedule`] and, once a run
//! is assembled, writes its slots back through [`SlotSink`].
//!
//! A checker answers from committed data only. It does not see rooms used
//! earlier in the same run; within a run that is safe because the cursor
//! never yields two overlapping windows. Across concurrent runs it is not,
//! see [`ScheduleCoordinator`](crate::coordinator::ScheduleCoordinator).

mod book;

pub use book::ScheduleBook;

use log::trace;

use crate::error::Result;
use crate::models::{GeneratedSlot, Room, TimeWindow};

/// Read-only view of reservations committed before a run started.
pub trait CommittedSchedule {
    /// Windows in which a room is already reserved.
    fn room_reservations(&self, room_id: &str) -> Vec<TimeWindow>;

    /// Windows in which a teacher is already committed.
    fn teacher_commitments(&self, teacher_id: &str) -> Vec<TimeWindow>;
}

/// Receiver for generated slots, invoked once per slot after assembly.
pub trait SlotSink {
    /// Persists one slot.
    fn persist(&mut self, slot: &GeneratedSlot) -> Result<()>;
}

/// A committed schedule with no reservations at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCommitments;

impl CommittedSchedule for NoCommitments {
    fn room_reservations(&self, _room_id: &str) -> Vec<TimeWindow> {
        Vec::new()
    }

    fn teacher_commitments(&self, _teacher_id: &str) -> Vec<TimeWindow> {
        Vec::new()
    }
}

impl<T: CommittedSchedule + ?Sized> CommittedSchedule for &T {
    fn room_reservations(&self, room_id: &str) -> Vec<TimeWindow> {
        (**self).room_reservations(room_id)
    }

    fn teacher_commitments(&self, teacher_id: &str) -> Vec<TimeWindow> {
        (**self).teacher_commitments(teacher_id)
    }
}

/// Answers whether a room is free for a window.
#[derive(Debug)]
pub struct RoomAvailabilityChecker<'a, C: ?Sized> {
    committed: &'a C,
}

impl<'a, C: CommittedSchedule + ?Sized> RoomAvailabilityChecker<'a, C> {
    /// Creates a checker over a committed schedule.
    pub fn new(committed: &'a C) -> Self {
        Self { committed }
    }

    /// Whether no committed reservation of `room` overlaps `window`.
    pub fn is_available(&self, room: &Room, window: &TimeWindow) -> bool {
        let reservations = self.committed.room_reservations(&room.id);
        let free = !window.overlaps_any(&reservations);
        if !free {
            trace!("room {} reserved during {:?}", room.id, window);
        }
        free
    }

    /// Rooms free for `window`, sorted by capacity descending.
    ///
    /// The sort is stable, so rooms of equal capacity keep input order.
    pub fn available_rooms<'r>(&self, rooms: &'r [Room], window: &TimeWindow) -> Vec<&'r Room> {
        let mut available: Vec<&Room> = rooms
            .iter()
            .filter(|r| self.is_available(r, window))
            .collect();
        available.sort_by(|a, b| b.capacity.cmp(&a.capacity));
        available
    }
}
