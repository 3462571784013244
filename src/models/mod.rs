//! Exam scheduling domain models.
//!
//! Provides the data types for the inputs of a generation run (students,
//! rooms, teachers) and its output (generated slots and the schedule that
//! collects them).
//!
//! # Mapping
//!
//! | Model | Role in a run |
//! |-------|---------------|
//! | Student | Consumed exactly once from a FIFO queue |
//! | Room | Reusable venue with a seat capacity |
//! | Teacher | Proctor (conflict-checked) or grader (rotated) |
//! | TimeWindow | Half-open exam interval |
//! | GeneratedSlot | One window with rooms, proctors, graders |
//! | ExamSchedule | All slots of a run plus leftovers |

mod room;
mod schedule;
mod slot;
mod student;
mod teacher;
mod window;

pub use room::{Room, RoomStatus};
pub use schedule::{ExamSchedule, Termination};
pub use slot::{GeneratedSlot, GraderAssignment, ProctorAssignment, RoomAssignment};
pub use student::Student;
pub use teacher::Teacher;
pub use window::TimeWindow;
