//! Error types for exam slot generation.

use thiserror::Error;

use crate::strategy::OptimizationStrategy;
use crate::validation::ValidationError;

/// Result type for scheduling operations.
pub type Result<T> = std::result::Result<T, ScheduleError>;

/// Errors that can occur when generating an exam schedule.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScheduleError {
    /// The request failed input validation; no allocation was attempted.
    #[error("invalid request: {}", join_messages(.0))]
    Validation(Vec<ValidationError>),

    /// The selected strategy has no implementation.
    #[error("optimization strategy {0:?} is not implemented")]
    StrategyNotImplemented(OptimizationStrategy),

    /// The strategy ran but produced no slot at all.
    #[error("no exam slots could be generated")]
    NoSlotsGenerated,

    /// Writing a generated slot to the committed store failed.
    #[error("persistence failed: {0}")]
    Persistence(String),
}

impl ScheduleError {
    /// Whether the error stems from the caller's input (400-equivalent).
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::StrategyNotImplemented(_))
    }
}

impl From<Vec<ValidationError>> for ScheduleError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::Validation(errors)
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
