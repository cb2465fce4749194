use std::collections::HashMap;
use std::rc::Rc;

use tracing::debug;

use crate::errors::{GradebookError, Result};
use crate::model::{Course, Grade, Student};

/// Per-scope identity map and relationship cache
///
/// A Session scopes entity identity to a logical unit of work (one request or
/// one test case). While open it guarantees at most one in-memory
/// representation per persisted row: repeated loads of the same (type, id)
/// return clones of the same `Rc`. It also owns relationship collections
/// stored by the cached resolver accessors; those are returned unchanged for
/// the rest of the session's lifetime and are only refreshed by closing and
/// reopening the session.
///
/// Not thread-safe (no Arc/RwLock) - designed for single-threaded use.
/// Concurrent units of work must each construct their own Session.
#[derive(Debug, Default)]
pub struct Session {
    state: Option<SessionState>,
}

#[derive(Debug, Default)]
struct SessionState {
    students: HashMap<i64, Rc<Student>>,
    courses: HashMap<i64, Rc<Course>>,
    grades: HashMap<i64, Rc<Grade>>,
    /// course id -> collection stored by the cached students accessor
    course_students: HashMap<i64, Vec<Rc<Student>>>,
}

impl Session {
    /// Create a new, closed session
    pub fn new() -> Self {
        Self { state: None }
    }

    /// Open the session with a fresh identity map and relationship cache
    ///
    /// # Errors
    ///
    /// Returns `SessionAlreadyOpen` if the session is already open.
    pub fn open(&mut self) -> Result<()> {
        if self.state.is_some() {
            return Err(GradebookError::SessionAlreadyOpen);
        }
        self.state = Some(SessionState::default());
        debug!("session opened");
        Ok(())
    }

    /// Discard the identity map and all cached relationship collections
    ///
    /// # Errors
    ///
    /// Returns `SessionNotOpen` if no session is open.
    pub fn close(&mut self) -> Result<()> {
        if self.state.take().is_none() {
            return Err(GradebookError::SessionNotOpen);
        }
        debug!("session closed");
        Ok(())
    }

    /// Check whether the session is open
    pub fn is_open(&self) -> bool {
        self.state.is_some()
    }

    /// Return the cached Student for `id`, or materialize it via `loader`
    pub fn student(&mut self, id: i64, loader: impl FnOnce() -> Student) -> Result<Rc<Student>> {
        let state = self.state_mut()?;
        let entry = state
            .students
            .entry(id)
            .or_insert_with(|| Rc::new(loader()));
        Ok(Rc::clone(entry))
    }

    /// Return the cached Course for `id`, or materialize it via `loader`
    pub fn course(&mut self, id: i64, loader: impl FnOnce() -> Course) -> Result<Rc<Course>> {
        let state = self.state_mut()?;
        let entry = state.courses.entry(id).or_insert_with(|| Rc::new(loader()));
        Ok(Rc::clone(entry))
    }

    /// Return the cached Grade for `id`, or materialize it via `loader`
    pub fn grade(&mut self, id: i64, loader: impl FnOnce() -> Grade) -> Result<Rc<Grade>> {
        let state = self.state_mut()?;
        let entry = state.grades.entry(id).or_insert_with(|| Rc::new(loader()));
        Ok(Rc::clone(entry))
    }

    /// Get the stored student collection for a course, if one was cached
    pub fn cached_course_students(&self, course_id: i64) -> Result<Option<Vec<Rc<Student>>>> {
        let state = self.state.as_ref().ok_or(GradebookError::SessionNotOpen)?;
        Ok(state.course_students.get(&course_id).cloned())
    }

    /// Store a student collection for a course in the relationship cache
    pub fn store_course_students(
        &mut self,
        course_id: i64,
        students: Vec<Rc<Student>>,
    ) -> Result<()> {
        let state = self.state_mut()?;
        state.course_students.insert(course_id, students);
        Ok(())
    }

    fn state_mut(&mut self) -> Result<&mut SessionState> {
        self.state.as_mut().ok_or(GradebookError::SessionNotOpen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_session() -> Session {
        let mut session = Session::new();
        session.open().unwrap();
        session
    }

    #[test]
    fn test_open_twice_fails() {
        let mut session = open_session();
        assert_eq!(session.open(), Err(GradebookError::SessionAlreadyOpen));
    }

    #[test]
    fn test_close_without_open_fails() {
        let mut session = Session::new();
        assert_eq!(session.close(), Err(GradebookError::SessionNotOpen));
    }

    #[test]
    fn test_close_then_reopen() {
        let mut session = open_session();
        session.close().unwrap();
        assert!(!session.is_open());
        session.open().unwrap();
        assert!(session.is_open());
    }

    #[test]
    fn test_identity_map_returns_same_instance() {
        let mut session = open_session();

        let first = session
            .student(1, || Student::new(1, "Adam", "Kowalski", 100_122))
            .unwrap();
        // Second load must hit the map; the loader would produce different fields
        let second = session
            .student(1, || Student::new(1, "Other", "Person", 999_999))
            .unwrap();

        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(second.first_name, "Adam");
    }

    #[test]
    fn test_identity_map_is_per_type() {
        let mut session = open_session();

        session
            .student(1, || Student::new(1, "Adam", "Kowalski", 100_122))
            .unwrap();
        let course = session.course(1, || Course::new(1, "TO")).unwrap();
        assert_eq!(course.name, "TO");
    }

    #[test]
    fn test_close_discards_identity_map() {
        let mut session = open_session();
        let first = session
            .student(1, || Student::new(1, "Adam", "Kowalski", 100_122))
            .unwrap();

        session.close().unwrap();
        session.open().unwrap();

        let second = session
            .student(1, || Student::new(1, "Adam", "Kowalski", 100_122))
            .unwrap();
        assert!(!Rc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_relationship_cache_round_trip() {
        let mut session = open_session();
        assert!(session.cached_course_students(7).unwrap().is_none());

        let student = session
            .student(1, || Student::new(1, "Adam", "Kowalski", 100_122))
            .unwrap();
        session
            .store_course_students(7, vec![Rc::clone(&student)])
            .unwrap();

        let cached = session.cached_course_students(7).unwrap().unwrap();
        assert_eq!(cached.len(), 1);
        assert!(Rc::ptr_eq(&cached[0], &student));
    }

    #[test]
    fn test_accessors_fail_when_closed() {
        let mut session = Session::new();
        let result = session.student(1, || Student::new(1, "A", "B", 1));
        assert_eq!(result.unwrap_err(), GradebookError::SessionNotOpen);
        assert_eq!(
            session.cached_course_students(1).unwrap_err(),
            GradebookError::SessionNotOpen
        );
    }
}
