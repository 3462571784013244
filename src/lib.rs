//! Exam slot generation.
//!
//! Partitions a roster of students into time-bounded exam slots and rooms,
//! assigns proctors without time conflicts while balancing their load, and
//! rotates graders across rooms, all while respecting room and teacher
//! reservations already committed elsewhere.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Student`, `Room`, `Teacher`, `TimeWindow`,
//!   `GeneratedSlot`, `ExamSchedule`
//! - **`scheduler`**: The greedy slot assembler and its parts (cursor,
//!   packer, proctor balancer, grader rotator) plus KPIs
//! - **`availability`**: Read/write seams to the committed schedule store
//! - **`validation`**: Request integrity checks
//! - **`request`**: The request payload and `generate` entry point
//! - **`coordinator`**: Serialized generation over a shared store
//!
//! # Example
//!
//! ```
//! use chrono::{NaiveDate, NaiveTime};
//! use exam_schedule::models::{Room, Student, Teacher};
//! use exam_schedule::{GenerationRequest, OptimizationStrategy};
//!
//! let request = GenerationRequest::new(
//!     NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
//!     NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
//!     NaiveTime::from_hms_opt(11, 0, 0).unwrap(),
//!     60,
//! )
//! .with_relaxation(15)
//! .with_students((0..25).map(|i| Student::new(format!("S{i}"))).collect())
//! .with_rooms(vec![Room::new("A", 15), Room::new("B", 10)])
//! .with_teachers(vec![Teacher::new("T1"), Teacher::new("T2")])
//! .with_grade_teachers(vec![Teacher::new("G1")])
//! .with_strategy(OptimizationStrategy::BySlot);
//!
//! let schedule = request.generate().unwrap();
//! assert_eq!(schedule.slot_count(), 1);
//! ```

pub mod availability;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod models;
pub mod request;
pub mod scheduler;
pub mod strategy;
pub mod validation;

pub use config::SchedulerConfig;
pub use coordinator::ScheduleCoordinator;
pub use error::{Result, ScheduleError};
pub use request::GenerationRequest;
pub use strategy::OptimizationStrategy;
