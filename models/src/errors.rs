// models/src/errors.rs

pub use thiserror::Error;

/// A validation error raised while constructing records from raw input.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// An identifier has an invalid length.
    #[error("identifier has invalid length")]
    InvalidIdentifierLength,
    /// A clock time was not in `HH:MM` form.
    #[error("invalid time of day: {0}")]
    InvalidTimeFormat(String),
    /// A normal range whose lower bound exceeds its upper bound.
    #[error("invalid normal range: min {min} is greater than max {max}")]
    InvalidRange { min: f64, max: f64 },
    /// A medication log whose taken flag and taken-at time disagree.
    #[error("medication log {0} has a taken flag that disagrees with its taken-at time")]
    InconsistentDose(String),
}

/// A type alias for a `Result` that returns a `ValidationError` on failure.
pub type ValidationResult<T> = Result<T, ValidationError>;
