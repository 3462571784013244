//! Room-descending student packing.
//!
//! # Algorithm
//!
//! Rooms arrive sorted by capacity, largest first. Each room takes up to
//! `capacity` students from the front of the queue. Packing stops as soon
//! as the queue is empty; rooms that would receive nobody are left out of
//! the slot.
//!
//! # Complexity
//! O(r + s) where r=rooms, s=students placed.

use std::collections::VecDeque;

use crate::models::{Room, RoomAssignment, Student};

/// Greedy packer that fills the largest rooms first.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoomPacker;

impl RoomPacker {
    /// Creates a packer.
    pub fn new() -> Self {
        Self
    }

    /// Fills `rooms` in order from the front of `queue`.
    ///
    /// `rooms` must already be free for the window and sorted by capacity
    /// descending. Students taken from the queue are consumed.
    pub fn pack(&self, rooms: &[&Room], queue: &mut VecDeque<Student>) -> Vec<RoomAssignment> {
        let mut assignments = Vec::new();
        for room in rooms {
            if queue.is_empty() {
                break;
            }
            let take = (room.capacity as usize).min(queue.len());
            if take == 0 {
                continue;
            }
            let students: Vec<Student> = queue.drain(..take).collect();
            assignments.push(RoomAssignment::new(room, students));
        }
        assignments
    }
}
