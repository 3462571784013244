//! Greedy exam-slot scheduler and KPI evaluation.
//!
//! # Algorithm
//!
//! `SlotAssembler` walks exam windows with a `TimeWindowCursor`, packs
//! queued students into the free rooms of each window with `RoomPacker`,
//! then staffs the slot with `ProctorBalancer` (least-loaded, conflict-free)
//! and `GraderRotator` (round-robin). It is a deterministic heuristic, not
//! an optimizer: it does not minimize slots, days, or teacher movement.
//!
//! All mutable staffing state of a run lives in a `RunContext` owned by the
//! run.
//!
//! # KPI
//!
//! `ScheduleKpi` computes seat utilization and staffing balance.

mod assembler;
mod context;
mod cursor;
mod grader;
mod kpi;
mod packer;
mod proctor;

pub use assembler::SlotAssembler;
pub use context::RunContext;
pub use cursor::{ExamTiming, TimeWindowCursor};
pub use grader::GraderRotator;
pub use kpi::ScheduleKpi;
pub use packer::RoomPacker;
pub use proctor::ProctorBalancer;
