//! Round-robin grader assignment.
//!
//! Each room assignment takes the grader at the front of the run's queue,
//! and that grader goes straight to the back. Graders have no time
//! constraint, so one grader may cover rooms in overlapping slots. With an
//! empty queue no grader is assigned and no error is raised.

use super::RunContext;
use crate::models::{GraderAssignment, RoomAssignment};

/// Cyclic grader assignment over a run-scoped queue.
#[derive(Debug, Clone, Copy, Default)]
pub struct GraderRotator;

impl GraderRotator {
    /// Creates a rotator.
    pub fn new() -> Self {
        Self
    }

    /// Assigns one grader per room assignment, in room order.
    pub fn assign(&self, rooms: &[RoomAssignment], ctx: &mut RunContext) -> Vec<GraderAssignment> {
        let mut assignments = Vec::with_capacity(rooms.len());
        for room in rooms {
            let Some(grader) = ctx.rotate_grader() else {
                break;
            };
            assignments.push(GraderAssignment::new(room.room_id.clone(), &grader));
        }
        assignments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Room, Student, Teacher};

    fn rooms(ids: &[&str]) -> Vec<RoomAssignment> {
        ids.iter()
            .map(|id| RoomAssignment::new(&Room::new(*id, 10), vec![Student::new("S")]))
            .collect()
    }

    #[test]
    fn test_rotation_across_slots() {
        let graders = vec![Teacher::new("G1"), Teacher::new("G2"), Teacher::new("G3")];
        let mut ctx = RunContext::new(&graders);
        let rotator = GraderRotator::new();

        let first = rotator.assign(&rooms(&["A", "B"]), &mut ctx);
        let second = rotator.assign(&rooms(&["A", "B"]), &mut ctx);

        let picked: Vec<&str> = first
            .iter()
            .chain(second.iter())
            .map(|g| g.teacher_id.as_str())
            .collect();
        assert_eq!(picked, vec!["G1", "G2", "G3", "G1"]);
        assert_eq!(second[0].room_id, "A");
    }

    #[test]
    fn test_fewer_graders_than_rooms_wraps() {
        let graders = vec![Teacher::new("G1")];
        let mut ctx = RunContext::new(&graders);

        let out = GraderRotator::new().assign(&rooms(&["A", "B", "C"]), &mut ctx);
        assert_eq!(out.len(), 3);
        assert!(out.iter().all(|g| g.teacher_id == "G1"));
    }

    #[test]
    fn test_no_graders() {
        let mut ctx = RunContext::new(&[]);
        let out = GraderRotator::new().assign(&rooms(&["A", "B"]), &mut ctx);
        assert!(out.is_empty());
    }
}
