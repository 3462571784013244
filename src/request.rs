//! Generation request payload and entry point.
//!
//! A [`GenerationRequest`] mirrors the JSON body a caller submits:
//!
//! ```json
//! {
//!   "students": [{"code": "S1", "fullName": "...", "email": "..."}],
//!   "rooms": [{"roomId": "A", "roomName": "Hall A", "capacity": 15, "status": "available"}],
//!   "teachers": [{"teacherId": "T1", "fullName": "..."}],
//!   "gradeTeachers": [{"teacherId": "G1", "fullName": "..."}],
//!   "startDate": "2024-06-03",
//!   "startTimeInDay": "08:00:00",
//!   "endTimeInDay": "11:00:00",
//!   "duration": 60,
//!   "relaxationTime": 15,
//!   "optimizationStrategy": "BySlot"
//! }
//! ```

use chrono::{NaiveDate, NaiveTime};
use log::info;
use serde::{Deserialize, Serialize};

use crate::availability::{CommittedSchedule, NoCommitments};
use crate::config::SchedulerConfig;
use crate::error::{Result, ScheduleError};
use crate::models::{ExamSchedule, Room, Student, Teacher};
use crate::scheduler::{ExamTiming, SlotAssembler};
use crate::strategy::OptimizationStrategy;
use crate::validation::{validate_request, ValidationError, ValidationErrorKind};

/// Input of one exam generation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    /// Students to seat.
    #[serde(default)]
    pub students: Vec<Student>,
    /// Room pool.
    #[serde(default)]
    pub rooms: Vec<Room>,
    /// Proctor pool.
    #[serde(default)]
    pub teachers: Vec<Teacher>,
    /// Grader pool, in rotation order.
    #[serde(default)]
    pub grade_teachers: Vec<Teacher>,
    /// First exam day.
    pub start_date: NaiveDate,
    /// Earliest exam start each day.
    pub start_time_in_day: NaiveTime,
    /// Latest exam end each day.
    pub end_time_in_day: NaiveTime,
    /// Exam duration (minutes).
    pub duration: u32,
    /// Break between exams (minutes).
    #[serde(default)]
    pub relaxation_time: u32,
    /// Selected strategy.
    #[serde(default)]
    pub optimization_strategy: Option<OptimizationStrategy>,
}

impl GenerationRequest {
    /// Creates a request with timing only; pools start empty.
    pub fn new(
        start_date: NaiveDate,
        start_time_in_day: NaiveTime,
        end_time_in_day: NaiveTime,
        duration: u32,
    ) -> Self {
        Self {
            students: Vec::new(),
            rooms: Vec::new(),
            teachers: Vec::new(),
            grade_teachers: Vec::new(),
            start_date,
            start_time_in_day,
            end_time_in_day,
            duration,
            relaxation_time: 0,
            optimization_strategy: None,
        }
    }

    /// Sets the students.
    pub fn with_students(mut self, students: Vec<Student>) -> Self {
        self.students = students;
        self
    }

    /// Sets the rooms.
    pub fn with_rooms(mut self, rooms: Vec<Room>) -> Self {
        self.rooms = rooms;
        self
    }

    /// Sets the proctor pool.
    pub fn with_teachers(mut self, teachers: Vec<Teacher>) -> Self {
        self.teachers = teachers;
        self
    }

    /// Sets the grader pool.
    pub fn with_grade_teachers(mut self, grade_teachers: Vec<Teacher>) -> Self {
        self.grade_teachers = grade_teachers;
        self
    }

    /// Sets the relaxation time (minutes).
    pub fn with_relaxation(mut self, minutes: u32) -> Self {
        self.relaxation_time = minutes;
        self
    }

    /// Selects a strategy.
    pub fn with_strategy(mut self, strategy: OptimizationStrategy) -> Self {
        self.optimization_strategy = Some(strategy);
        self
    }

    /// Timing parameters for the cursor.
    pub fn timing(&self) -> ExamTiming {
        ExamTiming::new(
            self.start_date,
            self.start_time_in_day,
            self.end_time_in_day,
            self.duration,
            self.relaxation_time,
        )
    }

    /// Generates a schedule with no prior reservations and default limits.
    pub fn generate(&self) -> Result<ExamSchedule> {
        self.generate_with(&NoCommitments, &SchedulerConfig::default())
    }

    /// Validates the request, runs the selected strategy, and returns the schedule.
    ///
    /// # Errors
    /// - [`ScheduleError::Validation`] if the request is malformed.
    /// - [`ScheduleError::StrategyNotImplemented`] for any strategy but `BySlot`.
    /// - [`ScheduleError::NoSlotsGenerated`] if the run produced no slot.
    ///
    /// A run that places only some students is returned as `Ok`; check
    /// [`ExamSchedule::is_complete`].
    pub fn generate_with<C>(&self, committed: &C, config: &SchedulerConfig) -> Result<ExamSchedule>
    where
        C: CommittedSchedule + ?Sized,
    {
        validate_request(self)?;
        let strategy = self.optimization_strategy.ok_or_else(|| {
            ScheduleError::Validation(vec![ValidationError::new(
                ValidationErrorKind::MissingStrategy,
                "No optimization strategy selected",
            )])
        })?;

        let schedule = match strategy {
            OptimizationStrategy::BySlot => SlotAssembler::new(committed)
                .with_config(config.clone())
                .schedule(
                    &self.students,
                    &self.rooms,
                    &self.teachers,
                    &self.grade_teachers,
                    &self.timing(),
                ),
            other => return Err(ScheduleError::StrategyNotImplemented(other)),
        };

        if schedule.slots.is_empty() {
            return Err(ScheduleError::NoSlotsGenerated);
        }
        info!("{strategy} strategy produced {} slots", schedule.slot_count());
        Ok(schedule)
    }
}
