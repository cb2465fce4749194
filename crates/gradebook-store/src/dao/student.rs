use std::rc::Rc;

use gradebook_core::model::Student;
use gradebook_core::session::Session;
use rusqlite::Connection;
use tracing::debug;

use crate::errors::Result;
use crate::gateway::StoreGateway;

/// Map a student row by column name
pub(crate) fn row_to_student(row: &rusqlite::Row<'_>) -> rusqlite::Result<Student> {
    Ok(Student::new(
        row.get::<_, i64>("id")?,
        row.get::<_, String>("first_name")?,
        row.get::<_, String>("last_name")?,
        row.get::<_, i64>("index_number")?,
    ))
}

/// DAO for the student table
pub struct StudentDao;

impl StudentDao {
    /// Insert a new student and register it in the session identity map
    ///
    /// Returns `None` when the index number is already taken; a duplicate is
    /// a recoverable business outcome, not an error. Connection failures
    /// propagate.
    pub fn create(
        conn: &Connection,
        session: &mut Session,
        first_name: &str,
        last_name: &str,
        index_number: i64,
    ) -> Result<Option<Rc<Student>>> {
        let inserted = StoreGateway::insert(
            conn,
            "student_create",
            "INSERT INTO student (first_name, last_name, index_number) VALUES (?1, ?2, ?3)",
            rusqlite::params![first_name, last_name, index_number],
        );

        let id = match inserted {
            Ok(id) => id,
            Err(err) if err.is_constraint_violation() => {
                debug!(index_number, "duplicate index number, student not created");
                return Ok(None);
            }
            Err(err) => return Err(err),
        };

        // Fields are already known, so the loader is the identity
        let student =
            session.student(id, || Student::new(id, first_name, last_name, index_number))?;
        Ok(Some(student))
    }

    /// Find a student by primary key; an absent row is not an error
    pub fn find_by_id(
        conn: &Connection,
        session: &mut Session,
        id: i64,
    ) -> Result<Option<Rc<Student>>> {
        let row = StoreGateway::query_optional(
            conn,
            "student_find_by_id",
            "SELECT id, first_name, last_name, index_number FROM student WHERE id = ?1",
            [id],
            row_to_student,
        )?;

        match row {
            Some(student) => {
                let id = student.id;
                Ok(Some(session.student(id, move || student)?))
            }
            None => Ok(None),
        }
    }

    /// Find a student by the unique index number
    pub fn find_by_index_number(
        conn: &Connection,
        session: &mut Session,
        index_number: i64,
    ) -> Result<Option<Rc<Student>>> {
        let row = StoreGateway::query_optional(
            conn,
            "student_find_by_index_number",
            "SELECT id, first_name, last_name, index_number FROM student WHERE index_number = ?1",
            [index_number],
            row_to_student,
        )?;

        match row {
            Some(student) => {
                let id = student.id;
                Ok(Some(session.student(id, move || student)?))
            }
            None => Ok(None),
        }
    }
}
