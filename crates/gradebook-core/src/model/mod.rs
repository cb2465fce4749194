//! Domain models
//!
//! All entities are immutable value objects once constructed: identified by a
//! store-assigned numeric id, compared structurally over all fields.

mod course;
mod grade;
mod student;

pub use course::Course;
pub use grade::Grade;
pub use student::Student;
