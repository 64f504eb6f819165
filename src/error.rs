//! Custom error types for tripplan
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::Money;

/// The main error type for tripplan operations
#[derive(Error, Debug)]
pub enum TripError {
    /// Budget was zero or negative at ledger creation
    #[error("Budget must be greater than zero (got {0})")]
    InvalidBudget(Money),

    /// Catalog index out of bounds
    #[error("No destination at position {index}: the catalog has {size} entries")]
    OutOfRange { index: i64, size: usize },

    /// A destination was added before a budget was set
    #[error("No budget set: set a budget before adding destinations")]
    NoBudgetSet,

    /// Import/read failures (file unreadable, unparseable cost field)
    #[error("Read error: {0}")]
    Read(String),

    /// Export/write failures
    #[error("Write error: {0}")]
    Write(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),
}

impl TripError {
    /// Create an `OutOfRange` error for a catalog of the given size
    pub fn out_of_range(index: i64, size: usize) -> Self {
        Self::OutOfRange { index, size }
    }

    /// Check if this is a recoverable error (reported at the menu boundary,
    /// after which the session continues)
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::NoBudgetSet)
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for TripError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TripError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for tripplan operations
pub type TripResult<T> = Result<T, TripError>;
