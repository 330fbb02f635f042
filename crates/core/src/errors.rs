//! Core error types for the CreditSight domain engine.
//!
//! This module defines the root error type shared by all domain modules.
//! Module-specific errors (e.g. forecast errors) are converted into these
//! types at the module boundary.

use thiserror::Error;

use crate::forecast::ForecastError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the dashboard domain engine.
///
/// Provider failures never reach consumers as errors: the dashboard layer
/// degrades to locally generated data instead. This type covers the strict
/// API paths and input validation.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Forecast operation failed: {0}")]
    Forecast(#[from] ForecastError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Data provider error: {0}")]
    Provider(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Validation errors for user input and profile data.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Credit score {0} is outside the valid range 300-850")]
    ScoreOutOfRange(i32),

    #[error("Percentage value '{field}' must be between 0 and 100, got {value}")]
    PercentageOutOfRange { field: String, value: f64 },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),
}

// === From implementations for common error types ===

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::InvalidInput(err.to_string()))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
