//! # Error Types
//!
//! Structured error types for takeoff_core. Calculators themselves never fail:
//! a missing optional field just drops the line item it feeds. Errors only
//! surface at the boundaries, when the form gate rejects an input record,
//! when a configuration file cannot be read, or when JSON cannot be parsed.
//!
//! ## Example
//!
//! ```rust
//! use takeoff_core::errors::{CalcError, CalcResult};
//!
//! fn check_waste(waste_pct: f64) -> CalcResult<()> {
//!     if !(0.0..=50.0).contains(&waste_pct) {
//!         return Err(CalcError::invalid_input(
//!             "sobraPct",
//!             waste_pct.to_string(),
//!             "Waste must be between 0 and 50%",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::validation::ValidationStep;

/// Result type alias for takeoff_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for take-off operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (out of range, wrong type, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Mosaic format code not present in the format table
    #[error("Mosaic format not found: {code}")]
    FormatNotFound { code: String },

    /// The form gate rejected the input record
    #[error("Validation failed at step {step}: {message}")]
    ValidationFailed {
        step: ValidationStep,
        message: String,
    },

    /// Configuration file could not be read or is invalid
    #[error("Config error: '{path}' - {reason}")]
    ConfigError { path: String, reason: String },

    /// JSON/TOML serialization or deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a FormatNotFound error
    pub fn format_not_found(code: impl Into<String>) -> Self {
        CalcError::FormatNotFound { code: code.into() }
    }

    /// Create a ValidationFailed error
    pub fn validation_failed(step: ValidationStep, message: impl Into<String>) -> Self {
        CalcError::ValidationFailed {
            step,
            message: message.into(),
        }
    }

    /// Create a ConfigError
    pub fn config_error(path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::ConfigError {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// True when the caller can fix the input and try again
    pub fn is_user_correctable(&self) -> bool {
        matches!(
            self,
            CalcError::InvalidInput { .. }
                | CalcError::FormatNotFound { .. }
                | CalcError::ValidationFailed { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::FormatNotFound { .. } => "FORMAT_NOT_FOUND",
            CalcError::ValidationFailed { .. } => "VALIDATION_FAILED",
            CalcError::ConfigError { .. } => "CONFIG_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("sobraPct", "75", "Waste must be between 0 and 50%");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_validation_error_display() {
        let error = CalcError::validation_failed(ValidationStep::Environment, "Select an environment");
        assert_eq!(error.error_code(), "VALIDATION_FAILED");
        assert!(error.to_string().contains("Select an environment"));
        assert!(error.is_user_correctable());
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::format_not_found("9x9").error_code(), "FORMAT_NOT_FOUND");
        assert!(!CalcError::config_error("a.toml", "bad").is_user_correctable());
    }
}
