//! Gradebook Core - domain model and session layer
//!
//! This crate provides the foundational pieces of the gradebook persistence
//! layer, including:
//! - Student, Course, and Grade models as immutable value objects
//! - Canonical error taxonomy splitting recoverable constraint violations
//!   from fatal connection failures
//! - Session with identity map and relationship cache
//! - Logging facility initialization

pub mod errors;
pub mod logging;
pub mod model;
pub mod session;

// Re-export commonly used types
pub use errors::{GradebookError, Result};
pub use model::{Course, Grade, Student};
pub use session::Session;
