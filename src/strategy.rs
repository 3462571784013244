//! Optimization strategy selection.
//!
//! Only [`OptimizationStrategy::BySlot`] has an implementation. The other
//! variants are accepted on the wire so a request naming them fails with
//! [`ScheduleError::StrategyNotImplemented`](crate::error::ScheduleError)
//! instead of silently producing nothing.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How a generation run organizes its search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptimizationStrategy {
    /// Walk time windows in order and fill each with as many students as
    /// the free rooms can seat.
    BySlot,
    /// Organize generation around rooms.
    ByRoom,
    /// Organize generation around teacher availability.
    ByTeacher,
    /// Combined room and teacher organization.
    ByRoomAndTeacher,
}

impl OptimizationStrategy {
    /// Short name as used in requests.
    pub fn name(&self) -> &'static str {
        match self {
            Self::BySlot => "BySlot",
            Self::ByRoom => "ByRoom",
            Self::ByTeacher => "ByTeacher",
            Self::ByRoomAndTeacher => "ByRoomAndTeacher",
        }
    }
}

impl fmt::Display for OptimizationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
