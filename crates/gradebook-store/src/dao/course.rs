use std::rc::Rc;

use gradebook_core::model::{Course, Student};
use gradebook_core::session::Session;
use rusqlite::Connection;
use tracing::debug;

use crate::errors::Result;
use crate::gateway::StoreGateway;

/// Map a course row by column name
pub(crate) fn row_to_course(row: &rusqlite::Row<'_>) -> rusqlite::Result<Course> {
    Ok(Course::new(
        row.get::<_, i64>("id")?,
        row.get::<_, String>("name")?,
    ))
}

/// DAO for the course table and the student_course enrollment link
pub struct CourseDao;

impl CourseDao {
    /// Insert a new course and register it in the session identity map
    ///
    /// Returns `None` when the name is already taken.
    pub fn create(
        conn: &Connection,
        session: &mut Session,
        name: &str,
    ) -> Result<Option<Rc<Course>>> {
        let inserted = StoreGateway::insert(
            conn,
            "course_create",
            "INSERT INTO course (name) VALUES (?1)",
            [name],
        );

        let id = match inserted {
            Ok(id) => id,
            Err(err) if err.is_constraint_violation() => {
                debug!(name, "duplicate course name, course not created");
                return Ok(None);
            }
            Err(err) => return Err(err),
        };

        let course = session.course(id, || Course::new(id, name))?;
        Ok(Some(course))
    }

    /// Find a course by primary key; an absent row is not an error
    pub fn find_by_id(
        conn: &Connection,
        session: &mut Session,
        id: i64,
    ) -> Result<Option<Rc<Course>>> {
        let row = StoreGateway::query_optional(
            conn,
            "course_find_by_id",
            "SELECT id, name FROM course WHERE id = ?1",
            [id],
            row_to_course,
        )?;

        match row {
            Some(course) => {
                let id = course.id;
                Ok(Some(session.course(id, move || course)?))
            }
            None => Ok(None),
        }
    }

    /// Find a course by the unique name
    pub fn find_by_name(
        conn: &Connection,
        session: &mut Session,
        name: &str,
    ) -> Result<Option<Rc<Course>>> {
        let row = StoreGateway::query_optional(
            conn,
            "course_find_by_name",
            "SELECT id, name FROM course WHERE name = ?1",
            [name],
            row_to_course,
        )?;

        match row {
            Some(course) => {
                let id = course.id;
                Ok(Some(session.course(id, move || course)?))
            }
            None => Ok(None),
        }
    }

    /// Enroll a student in a course
    ///
    /// Returns `true` on success and `false` when the pair already exists,
    /// so re-enrolling never duplicates a row but the caller still learns
    /// which case occurred.
    pub fn enroll_student(conn: &Connection, course: &Course, student: &Student) -> Result<bool> {
        let inserted = StoreGateway::insert(
            conn,
            "enroll_student",
            "INSERT INTO student_course (student_id, course_id) VALUES (?1, ?2)",
            rusqlite::params![student.id, course.id],
        );

        match inserted {
            Ok(_) => Ok(true),
            Err(err) if err.is_constraint_violation() => {
                debug!(
                    student_id = student.id,
                    course_id = course.id,
                    "student already enrolled"
                );
                Ok(false)
            }
            Err(err) => Err(err),
        }
    }
}
