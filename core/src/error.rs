//! Error types for the submission workflow.
//!
//! - [`ValidationError`] - Local rule failures, never reach the network
//! - [`StoreError`] - Remote insert failures (connectivity or rejection)
//! - [`ParseOptionError`] - A value outside one of the fixed option sets

use thiserror::Error;

use crate::validation::FieldErrors;

// =============================================================================
// Validation Errors
// =============================================================================

/// Local validation failure.
///
/// The two variants are reported with different notifications, so they
/// stay distinct even though both carry per-field messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// One or more base fields failed their rule.
    #[error("Validation failed: {0}")]
    Fields(FieldErrors),

    /// Category is "Other" but the custom category is missing or too short.
    #[error("Custom category invalid: {0}")]
    CustomCategory(FieldErrors),
}

impl ValidationError {
    /// Per-field messages, for inline display next to the inputs.
    pub fn field_errors(&self) -> &FieldErrors {
        match self {
            ValidationError::Fields(errors) | ValidationError::CustomCategory(errors) => errors,
        }
    }
}

// =============================================================================
// Store Errors
// =============================================================================

/// Errors from the remote submissions table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The request never got a response.
    #[error("Network error: {0}")]
    Network(String),

    /// The store answered with a non-success status.
    #[error("Rejected by store ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// The request could not be built (bad URL, body encoding).
    #[error("Invalid request: {0}")]
    Request(String),
}

// =============================================================================
// Option Errors
// =============================================================================

/// A string that is not part of a fixed option set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown {kind}: '{value}'")]
pub struct ParseOptionError {
    pub kind: &'static str,
    pub value: String,
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Field;

    #[test]
    fn test_store_error_format() {
        let err = StoreError::Rejected {
            status: 409,
            message: "duplicate key value".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("409"));
        assert!(msg.contains("duplicate key value"));
    }

    #[test]
    fn test_field_errors_accessor() {
        let mut errors = FieldErrors::default();
        errors.push(Field::CustomCategory, "too short");
        let err = ValidationError::CustomCategory(errors.clone());
        assert_eq!(err.field_errors(), &errors);
        assert!(err.to_string().contains("too short"));
    }
}
