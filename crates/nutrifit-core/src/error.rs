//! # Error Types
//!
//! Domain-specific error types for nutrifit-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  nutrifit-core errors (this file)                                      │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Malformed operator input                       │
//! │                                                                         │
//! │  nutrifit-db errors (separate crate)                                   │
//! │  └── DbError          - NotFound / UniqueViolation / store failures    │
//! │                                                                         │
//! │  CLI errors (in app)                                                   │
//! │  └── CliError         - What the operator sees                         │
//! │                                                                         │
//! │  Flow: ValidationError → CliError → message, menu re-displayed         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A menu choice that the current state does not offer.
    #[error("Invalid choice '{0}'. Please try again.")]
    InvalidChoice(String),

    /// A money or quantity total that does not fit in an `i64`.
    #[error("{0} is too large to compute")]
    AmountOverflow(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These only cover type coercion of prompt input and required fields.
/// Uniqueness is enforced by the store, not here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Input could not be read as the expected number type.
    ///
    /// ## When This Occurs
    /// ```text
    /// Price: twelve
    ///      │
    ///      ▼
    /// InvalidNumber { field: "price", value: "twelve", expected: "a decimal number" }
    ///      │
    ///      ▼
    /// "price must be a decimal number, got 'twelve'"
    /// ```
    #[error("{field} must be {expected}, got '{value}'")]
    InvalidNumber {
        field: String,
        value: String,
        expected: &'static str,
    },

    /// Invalid format (e.g. an id too large to exist).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates a Required error for the given field.
    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::Required {
            field: field.into(),
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::required("name");
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::InvalidNumber {
            field: "price".to_string(),
            value: "twelve".to_string(),
            expected: "a decimal number",
        };
        assert_eq!(err.to_string(), "price must be a decimal number, got 'twelve'");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let core_err: CoreError = ValidationError::required("email").into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }

    #[test]
    fn test_invalid_choice_message() {
        let err = CoreError::InvalidChoice("9".to_string());
        assert_eq!(err.to_string(), "Invalid choice '9'. Please try again.");
    }

    #[test]
    fn test_amount_overflow_message() {
        let err = CoreError::AmountOverflow("Cart total for Alice".to_string());
        assert_eq!(err.to_string(), "Cart total for Alice is too large to compute");
    }
}
