//! # Error Types
//!
//! Structured error types for grid_core. Only the locator decoder can fail;
//! the geodesy and direction functions are total over decoded coordinates.
//!
//! ## Example
//!
//! ```rust
//! use grid_core::errors::{FormatViolation, GridError};
//! use grid_core::locator::decode;
//!
//! let err = decode("AB1C").unwrap_err();
//! assert_eq!(err.violation(), FormatViolation::SquareNotDigits);
//! assert_eq!(err.to_string(), "Characters 3-4 must be digits");
//! assert_eq!(err.error_code(), "INVALID_FORMAT");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for grid_core operations
pub type GridResult<T> = Result<T, GridError>;

/// Which structural rule of a locator was broken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatViolation {
    /// Length is not 2, 4, 6 or 8
    WrongLength,
    /// Characters 1-2 are not both letters A-R
    FieldNotLetters,
    /// Characters 3-4 are not both digits
    SquareNotDigits,
    /// Characters 5-6 are not both letters A-X
    SubsquareNotLetters,
    /// Characters 7-8 are not both digits
    ExtendedNotDigits,
}

impl FormatViolation {
    /// Human-readable message for this violation
    pub fn message(self) -> &'static str {
        match self {
            FormatViolation::WrongLength => "Grid square must be 2, 4, 6, or 8 characters",
            FormatViolation::FieldNotLetters => "First two characters must be letters A-R",
            FormatViolation::SquareNotDigits => "Characters 3-4 must be digits",
            FormatViolation::SubsquareNotLetters => "Characters 5-6 must be letters A-X",
            FormatViolation::ExtendedNotDigits => "Characters 7-8 must be digits",
        }
    }
}

impl std::fmt::Display for FormatViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Structured error type for locator operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum GridError {
    /// The locator string is not a well-formed Maidenhead locator
    #[error("{reason}")]
    InvalidFormat {
        locator: String,
        reason: FormatViolation,
    },
}

impl GridError {
    /// Create an InvalidFormat error
    pub fn invalid_format(locator: impl Into<String>, reason: FormatViolation) -> Self {
        GridError::InvalidFormat {
            locator: locator.into(),
            reason,
        }
    }

    /// The rule that was violated
    pub fn violation(&self) -> FormatViolation {
        match self {
            GridError::InvalidFormat { reason, .. } => *reason,
        }
    }

    /// The offending input, as given by the caller
    pub fn locator(&self) -> &str {
        match self {
            GridError::InvalidFormat { locator, .. } => locator,
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            GridError::InvalidFormat { .. } => "INVALID_FORMAT",
        }
    }
}
