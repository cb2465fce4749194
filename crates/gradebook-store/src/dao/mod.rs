//! Data-access operations
//!
//! Each DAO translates domain calls into Store Gateway statements, converts
//! constraint violations into value-level absence (`None` / `false`), and
//! resolves every loaded row through the session identity map. Connection
//! failures are never swallowed.

mod course;
mod grade;
mod student;

pub use course::CourseDao;
pub use grade::GradeDao;
pub use student::StudentDao;

pub(crate) use course::row_to_course;
pub(crate) use grade::row_to_grade;
pub(crate) use student::row_to_student;
