//! Relationship resolver
//!
//! Loads associated collections through join queries against the enrollment
//! link table and the grade foreign-key table, resolving every row through
//! the session identity map. Collections are unordered; callers must not
//! depend on iteration order.
//!
//! The cached course→students accessor stores its first result in the
//! session and returns it unchanged for the rest of the session's lifetime,
//! even if enrollments change underneath. There is no invalidation hook;
//! closing and reopening the session forces a refresh.

use std::collections::HashSet;
use std::rc::Rc;

use gradebook_core::model::{Course, Grade, Student};
use gradebook_core::session::Session;
use rusqlite::Connection;

use crate::dao::{row_to_course, row_to_grade, row_to_student};
use crate::errors::Result;
use crate::gateway::StoreGateway;

const STUDENTS_OF_COURSE_SQL: &str = "SELECT s.id, s.first_name, s.last_name, s.index_number
     FROM student s
     JOIN student_course sc ON sc.student_id = s.id
     WHERE sc.course_id = ?1";

/// Load the students enrolled in a course (uncached)
pub fn students_of_course(
    conn: &Connection,
    session: &mut Session,
    course: &Course,
) -> Result<HashSet<Rc<Student>>> {
    let rows = StoreGateway::query(
        conn,
        "students_of_course",
        STUDENTS_OF_COURSE_SQL,
        [course.id],
        row_to_student,
    )?;

    let mut students = HashSet::with_capacity(rows.len());
    for student in rows {
        let id = student.id;
        students.insert(session.student(id, move || student)?);
    }
    Ok(students)
}

/// Load the students enrolled in a course, cached per session
///
/// The first call per course id queries the store; subsequent calls return
/// the stored collection without touching the store.
pub fn cached_students_of_course(
    conn: &Connection,
    session: &mut Session,
    course: &Course,
) -> Result<Vec<Rc<Student>>> {
    if let Some(cached) = session.cached_course_students(course.id)? {
        return Ok(cached);
    }

    let rows = StoreGateway::query(
        conn,
        "cached_students_of_course",
        STUDENTS_OF_COURSE_SQL,
        [course.id],
        row_to_student,
    )?;

    let mut students = Vec::with_capacity(rows.len());
    for student in rows {
        let id = student.id;
        students.push(session.student(id, move || student)?);
    }

    session.store_course_students(course.id, students.clone())?;
    Ok(students)
}

/// Load the courses a student is enrolled in (uncached)
pub fn courses_of_student(
    conn: &Connection,
    session: &mut Session,
    student: &Student,
) -> Result<HashSet<Rc<Course>>> {
    let rows = StoreGateway::query(
        conn,
        "courses_of_student",
        "SELECT c.id, c.name
         FROM course c
         JOIN student_course sc ON sc.course_id = c.id
         WHERE sc.student_id = ?1",
        [student.id],
        row_to_course,
    )?;

    let mut courses = HashSet::with_capacity(rows.len());
    for course in rows {
        let id = course.id;
        courses.insert(session.course(id, move || course)?);
    }
    Ok(courses)
}

/// Load the grades a student received (uncached)
///
/// Grades carry a floating-point value and therefore no `Eq`/`Hash`; the
/// result is a sequence with unspecified order.
pub fn grades_of_student(
    conn: &Connection,
    session: &mut Session,
    student: &Student,
) -> Result<Vec<Rc<Grade>>> {
    let rows = StoreGateway::query(
        conn,
        "grades_of_student",
        "SELECT id, grade, student_id, course_id FROM grade WHERE student_id = ?1",
        [student.id],
        row_to_grade,
    )?;

    let mut grades = Vec::with_capacity(rows.len());
    for grade in rows {
        let id = grade.id;
        grades.push(session.grade(id, move || grade)?);
    }
    Ok(grades)
}
