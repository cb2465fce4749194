//! Error handling for gradebook-store
//!
//! Classifies rusqlite errors into the core taxonomy

use gradebook_core::errors::GradebookError;

/// Result type alias using GradebookError
pub type Result<T> = gradebook_core::errors::Result<T>;

/// Classify a rusqlite error for the named operation
///
/// SQLITE_CONSTRAINT rejections (uniqueness, foreign keys) become the
/// recoverable `ConstraintViolation` outcome; every other failure is a
/// transport-level `ConnectionFailure`.
pub fn from_rusqlite(op: &str, err: rusqlite::Error) -> GradebookError {
    match err {
        rusqlite::Error::SqliteFailure(e, _)
            if e.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            GradebookError::constraint_violation(op)
        }
        other => GradebookError::connection_failure(op, other.to_string()),
    }
}

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> GradebookError {
    GradebookError::connection_failure(
        "migration",
        format!("Migration {} failed: {}", migration_id, reason),
    )
}
