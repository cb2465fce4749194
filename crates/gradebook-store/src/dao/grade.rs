use gradebook_core::model::{Course, Grade, Student};
use rusqlite::Connection;
use tracing::debug;

use crate::errors::Result;
use crate::gateway::StoreGateway;

/// Map a grade row by column name
pub(crate) fn row_to_grade(row: &rusqlite::Row<'_>) -> rusqlite::Result<Grade> {
    Ok(Grade::new(
        row.get::<_, i64>("id")?,
        row.get::<_, f32>("grade")?,
        row.get::<_, i64>("student_id")?,
        row.get::<_, i64>("course_id")?,
    ))
}

/// DAO for the grade table
pub struct GradeDao;

impl GradeDao {
    /// Record a grade for a student in a course
    ///
    /// Returns `true` on success. A constraint rejection (which should not
    /// occur given valid references) yields `false`; connection failures
    /// propagate.
    pub fn grade_student(
        conn: &Connection,
        student: &Student,
        course: &Course,
        value: f32,
    ) -> Result<bool> {
        let inserted = StoreGateway::insert(
            conn,
            "grade_student",
            "INSERT INTO grade (grade, student_id, course_id) VALUES (?1, ?2, ?3)",
            rusqlite::params![value, student.id, course.id],
        );

        match inserted {
            Ok(_) => Ok(true),
            Err(err) if err.is_constraint_violation() => {
                debug!(
                    student_id = student.id,
                    course_id = course.id,
                    "grade rejected by the store"
                );
                Ok(false)
            }
            Err(err) => Err(err),
        }
    }
}
