//! Report aggregation
//!
//! Computes, per student, the average grade in each course the student has
//! grades for.

use std::collections::HashMap;
use std::rc::Rc;

use gradebook_core::model::{Course, Student};
use gradebook_core::session::Session;
use rusqlite::Connection;

use crate::dao::CourseDao;
use crate::errors::Result;
use crate::relations;

/// Build a per-course grade average report for a student
///
/// Grades are grouped by course and averaged as sum divided by count, which
/// keeps results reproducible under IEEE-754 regardless of accumulation
/// strategy. Courses without grades are absent from the map.
pub fn build_report(
    conn: &Connection,
    session: &mut Session,
    student: &Student,
) -> Result<HashMap<Rc<Course>, f32>> {
    let grades = relations::grades_of_student(conn, session, student)?;

    let mut sums: HashMap<i64, (f32, u32)> = HashMap::new();
    for grade in &grades {
        let entry = sums.entry(grade.course_id).or_insert((0.0, 0));
        entry.0 += grade.value;
        entry.1 += 1;
    }

    let mut report = HashMap::with_capacity(sums.len());
    for (course_id, (sum, count)) in sums {
        // Every grade references an existing course (foreign key), so the
        // lookup resolves through the identity map
        if let Some(course) = CourseDao::find_by_id(conn, session, course_id)? {
            report.insert(course, sum / count as f32);
        }
    }
    Ok(report)
}
