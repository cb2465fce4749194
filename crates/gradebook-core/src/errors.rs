use thiserror::Error;

/// Result type alias using GradebookError
pub type Result<T> = std::result::Result<T, GradebookError>;

/// Canonical error taxonomy for gradebook operations
///
/// Two classes of store failure are kept strictly apart: constraint
/// violations are recoverable business outcomes which DAO operations convert
/// into value-level absence, while connection failures are fatal to the
/// current operation and always propagate to the caller. Session lifecycle
/// misuse is programmer error and fatal as well.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradebookError {
    /// A uniqueness or referential-integrity rule was rejected by the store
    #[error("constraint violation in operation '{op}'")]
    ConstraintViolation { op: String },

    /// The store is unreachable or returned a transport-level error
    #[error("connection failure in operation '{op}': {message}")]
    ConnectionFailure { op: String, message: String },

    /// A session is already open for the current scope
    #[error("session is already open")]
    SessionAlreadyOpen,

    /// No session is open for the current scope
    #[error("session is not open")]
    SessionNotOpen,
}

impl GradebookError {
    /// Create a constraint violation for the named operation
    pub fn constraint_violation(op: impl Into<String>) -> Self {
        Self::ConstraintViolation { op: op.into() }
    }

    /// Create a connection failure for the named operation
    pub fn connection_failure(op: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ConnectionFailure {
            op: op.into(),
            message: message.into(),
        }
    }

    /// True for the recoverable constraint-violation outcome
    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, Self::ConstraintViolation { .. })
    }

    /// Get the stable error code for this error
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConstraintViolation { .. } => "ERR_CONSTRAINT_VIOLATION",
            Self::ConnectionFailure { .. } => "ERR_CONNECTION_FAILURE",
            Self::SessionAlreadyOpen => "ERR_SESSION_ALREADY_OPEN",
            Self::SessionNotOpen => "ERR_SESSION_NOT_OPEN",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_stable() {
        let cases = [
            (
                GradebookError::constraint_violation("student_create"),
                "ERR_CONSTRAINT_VIOLATION",
            ),
            (
                GradebookError::connection_failure("query", "disk I/O error"),
                "ERR_CONNECTION_FAILURE",
            ),
            (GradebookError::SessionAlreadyOpen, "ERR_SESSION_ALREADY_OPEN"),
            (GradebookError::SessionNotOpen, "ERR_SESSION_NOT_OPEN"),
        ];
        for (err, expected_code) in cases {
            assert_eq!(err.code(), expected_code, "Wrong code for {:?}", err);
        }
    }

    #[test]
    fn test_constraint_violation_classification() {
        let err = GradebookError::constraint_violation("enroll_student");
        assert!(err.is_constraint_violation());

        let err = GradebookError::connection_failure("enroll_student", "gone");
        assert!(!err.is_constraint_violation());
    }

    #[test]
    fn test_display_carries_operation() {
        let err = GradebookError::connection_failure("student_find_by_id", "no such table");
        let rendered = err.to_string();
        assert!(rendered.contains("student_find_by_id"));
        assert!(rendered.contains("no such table"));
    }
}
