//! # CLI Error Type
//!
//! Unified error type for menu actions and discrete commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in NutriFit                               │
//! │                                                                         │
//! │  Action / command handler                                               │
//! │  Result<(), CliError>                                                   │
//! │         │                                                               │
//! │         ├── DbError::NotFound ─────────────► NotFound    ┐              │
//! │         ├── DbError::UniqueViolation ──────► Constraint  │ recoverable  │
//! │         ├── DbError::ForeignKeyViolation ──► Constraint  │              │
//! │         ├── DbError::OutOfRange ───────────► Constraint  │              │
//! │         ├── ValidationError / CoreError ───► Validation  ┘              │
//! │         ├── any other DbError ─────────────► Database    ┐ propagates   │
//! │         └── std::io::Error ────────────────► Io          ┘              │
//! │                                                                         │
//! │  Menu loop:  recoverable → print "Error: ..." and re-display the menu  │
//! │  Command:    recoverable → print "Error: ..." and exit 1               │
//! │  Otherwise:  returned to main, which exits 1 with the error chain      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use tracing::error;

use nutrifit_core::{CoreError, ValidationError};
use nutrifit_db::DbError;

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Error returned from menu actions and commands.
#[derive(Debug, Clone)]
pub struct CliError {
    /// Machine-readable category
    pub code: ErrorCode,

    /// Human-readable message, printed as-is
    pub message: String,
}

/// Error categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// An id or name resolved to nothing
    NotFound,

    /// The store rejected a write (duplicate email, missing reference)
    Constraint,

    /// Operator input could not be parsed
    Validation,

    /// Connection, migration, or unexpected query failure
    Database,

    /// Terminal read/write failure
    Io,
}

impl CliError {
    /// Creates a new error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        CliError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        CliError::new(ErrorCode::Validation, message)
    }

    /// Whether the caller may report this and carry on.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self.code,
            ErrorCode::NotFound | ErrorCode::Constraint | ErrorCode::Validation
        )
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

/// Converts database errors to CLI errors.
impl From<DbError> for CliError {
    fn from(err: DbError) -> Self {
        let code = match &err {
            DbError::NotFound { .. } => ErrorCode::NotFound,
            DbError::UniqueViolation { .. }
            | DbError::ForeignKeyViolation { .. }
            | DbError::OutOfRange { .. } => ErrorCode::Constraint,
            DbError::ConnectionFailed(_)
            | DbError::MigrationFailed(_)
            | DbError::QueryFailed(_)
            | DbError::Internal(_) => {
                error!(error = %err, "Database operation failed");
                ErrorCode::Database
            }
        };
        CliError::new(code, err.to_string())
    }
}

impl From<ValidationError> for CliError {
    fn from(err: ValidationError) -> Self {
        CliError::validation(err.to_string())
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(e) => e.into(),
            other => CliError::validation(other.to_string()),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::new(ErrorCode::Io, format!("Terminal I/O failed: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_errors_are_categorized() {
        let not_found: CliError = DbError::not_found("Supplement", 7).into();
        assert_eq!(not_found.code, ErrorCode::NotFound);
        assert_eq!(not_found.to_string(), "Supplement not found: 7");
        assert!(not_found.is_recoverable());

        let duplicate: CliError = DbError::duplicate("email", "a@x.com").into();
        assert_eq!(duplicate.code, ErrorCode::Constraint);
        assert!(duplicate.is_recoverable());

        let lost: CliError = DbError::ConnectionFailed("gone".to_string()).into();
        assert_eq!(lost.code, ErrorCode::Database);
        assert!(!lost.is_recoverable());
    }

    #[test]
    fn test_validation_is_recoverable_io_is_not() {
        let bad: CliError = ValidationError::required("price").into();
        assert_eq!(bad.code, ErrorCode::Validation);
        assert_eq!(bad.message, "price is required");
        assert!(bad.is_recoverable());

        let io: CliError = std::io::Error::other("broken pipe").into();
        assert_eq!(io.code, ErrorCode::Io);
        assert!(!io.is_recoverable());
    }

    #[test]
    fn test_core_validation_keeps_inner_message() {
        let err: CliError = CoreError::Validation(ValidationError::required("name")).into();
        assert_eq!(err.message, "name is required");
    }
}
