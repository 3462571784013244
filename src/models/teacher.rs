//! Teacher model.
//!
//! The same type serves both staffing pools: proctors (time-conflict
//! constrained) and graders (unconstrained, rotated). Per-run state such as
//! proctor load lives in the scheduler's run context, not on the entity.

use serde::{Deserialize, Serialize};

/// A teacher eligible for proctoring or grading.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    /// Unique teacher identifier.
    #[serde(rename = "teacherId")]
    pub id: String,
    /// Full name.
    #[serde(default)]
    pub full_name: String,
}

impl Teacher {
    /// Creates a teacher with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            full_name: String::new(),
        }
    }

    /// Sets the full name.
    pub fn with_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = full_name.into();
        self
    }
}
