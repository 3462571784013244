//! Input validation for exam generation requests.
//!
//! Checks a request before any allocation is attempted. Detects:
//! - Empty student, room, proctor, or grader lists
//! - A missing optimization strategy
//! - Duplicate IDs (rooms, teachers within a pool, student codes)
//! - Rooms with zero capacity, or no room in service at all
//! - A daily window that cannot hold a single exam
//!
//! All problems are reported together; a failing request does no work.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::Teacher;
use crate::request::GenerationRequest;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationErrorKind {
    /// No students supplied.
    EmptyStudents,
    /// No rooms supplied.
    EmptyRooms,
    /// No proctor teachers supplied.
    EmptyProctors,
    /// No grading teachers supplied.
    EmptyGraders,
    /// No optimization strategy selected.
    MissingStrategy,
    /// Two entities share the same ID.
    DuplicateId,
    /// A room has zero capacity.
    InvalidCapacity,
    /// Rooms were supplied but none is in service.
    NoRoomInService,
    /// The daily end time is not after the start time.
    InvalidTimeRange,
    /// The exam duration is zero or longer than the daily window.
    InvalidDuration,
}

impl ValidationError {
    /// Creates a validation error.
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a generation request.
///
/// Checks:
/// 1. Students, rooms, proctors, and graders are all non-empty
/// 2. A strategy is selected
/// 3. No duplicate room IDs, student codes, or teacher IDs within a pool
/// 4. Every room has positive capacity, and at least one is in service
/// 5. The daily window is non-empty and fits at least one exam
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_request(request: &GenerationRequest) -> ValidationResult {
    let mut errors = Vec::new();

    if request.students.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyStudents,
            "Student list is empty",
        ));
    }
    if request.rooms.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyRooms,
            "Room list is empty",
        ));
    }
    if request.teachers.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyProctors,
            "Proctor teacher list is empty",
        ));
    }
    if request.grade_teachers.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyGraders,
            "Grading teacher list is empty",
        ));
    }
    if request.optimization_strategy.is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::MissingStrategy,
            "No optimization strategy selected",
        ));
    }

    // Rooms
    let mut room_ids = HashSet::new();
    for room in &request.rooms {
        if !room_ids.insert(room.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate room ID: {}", room.id),
            ));
        }
        if room.capacity == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidCapacity,
                format!("Room '{}' has zero capacity", room.id),
            ));
        }
    }
    if !request.rooms.is_empty() && !request.rooms.iter().any(|r| r.is_in_service()) {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoRoomInService,
            "No room has status 'available'",
        ));
    }

    // Students
    let mut codes = HashSet::new();
    for student in &request.students {
        if !codes.insert(student.code.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate student code: {}", student.code),
            ));
        }
    }

    // Teachers
    check_teacher_pool(&request.teachers, "proctor", &mut errors);
    check_teacher_pool(&request.grade_teachers, "grader", &mut errors);

    // Timing
    if request.end_time_in_day <= request.start_time_in_day {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidTimeRange,
            format!(
                "Daily end time {} is not after start time {}",
                request.end_time_in_day, request.start_time_in_day
            ),
        ));
    } else if request.duration == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidDuration,
            "Exam duration is zero",
        ));
    } else if !request.timing().fits_in_day() {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidDuration,
            format!(
                "Exam duration of {} minutes does not fit between {} and {}",
                request.duration, request.start_time_in_day, request.end_time_in_day
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_teacher_pool(pool: &[Teacher], role: &str, errors: &mut Vec<ValidationError>) {
    let mut ids = HashSet::new();
    for teacher in pool {
        if !ids.insert(teacher.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate {role} teacher ID: {}", teacher.id),
            ));
        }
    }
}
