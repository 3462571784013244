//! Run-scoped scheduling state.

use std::collections::{HashMap, VecDeque};

use crate::availability::CommittedSchedule;
use crate::models::{Teacher, TimeWindow};

/// Mutable state of one generation run.
///
/// Holds the proctor load counters, the windows each proctor is busy in,
/// and the grader rotation queue. A fresh context is built per run, so runs
/// never share staffing state through the process.
#[derive(Debug, Clone, Default)]
pub struct RunContext {
    /// Slots proctored so far in this run (teacher_id → count).
    load: HashMap<String, u32>,
    /// Windows each proctor is committed to (teacher_id → windows).
    busy: HashMap<String, Vec<TimeWindow>>,
    /// Grader rotation queue; front is next.
    graders: VecDeque<Teacher>,
}

impl RunContext {
    /// Creates a context with the given grader rotation order.
    pub fn new(graders: &[Teacher]) -> Self {
        Self {
            load: HashMap::new(),
            busy: HashMap::new(),
            graders: graders.iter().cloned().collect(),
        }
    }

    /// Seeds proctor busy windows from commitments made before the run.
    pub fn with_commitments<C>(mut self, proctors: &[Teacher], committed: &C) -> Self
    where
        C: CommittedSchedule + ?Sized,
    {
        for teacher in proctors {
            let windows = committed.teacher_commitments(&teacher.id);
            if !windows.is_empty() {
                self.busy.entry(teacher.id.clone()).or_default().extend(windows);
            }
        }
        self
    }

    /// Marks a teacher busy for a window without counting load.
    pub fn with_busy(mut self, teacher_id: impl Into<String>, window: TimeWindow) -> Self {
        self.busy.entry(teacher_id.into()).or_default().push(window);
        self
    }

    /// Proctoring load of a teacher (0 if never assigned).
    pub fn load(&self, teacher_id: &str) -> u32 {
        self.load.get(teacher_id).copied().unwrap_or(0)
    }

    /// All load counters.
    pub fn loads(&self) -> &HashMap<String, u32> {
        &self.load
    }

    /// Windows a teacher is busy in.
    pub fn busy_windows(&self, teacher_id: &str) -> &[TimeWindow] {
        self.busy.get(teacher_id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether a teacher has a commitment overlapping `window`.
    pub fn is_busy(&self, teacher_id: &str, window: &TimeWindow) -> bool {
        window.overlaps_any(self.busy_windows(teacher_id))
    }

    /// Records that a teacher proctors during `window`.
    pub fn record_proctoring(&mut self, teacher_id: &str, window: TimeWindow) {
        self.busy
            .entry(teacher_id.to_string())
            .or_default()
            .push(window);
        *self.load.entry(teacher_id.to_string()).or_insert(0) += 1;
    }

    /// Takes the next grader and re-enqueues it at the back.
    pub fn rotate_grader(&mut self) -> Option<Teacher> {
        let grader = self.graders.pop_front()?;
        self.graders.push_back(grader.clone());
        Some(grader)
    }

    /// Grader IDs in current rotation order.
    pub fn grader_order(&self) -> Vec<&str> {
        self.graders.iter().map(|t| t.id.as_str()).collect()
    }
}
