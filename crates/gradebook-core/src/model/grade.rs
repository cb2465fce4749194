use serde::{Deserialize, Serialize};

/// Grade - a single mark a student received in a course
///
/// Carries a floating-point value, so unlike Student and Course it has no
/// `Eq`/`Hash` and grade collections are sequences rather than sets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grade {
    /// Store-assigned identifier (positive)
    pub id: i64,

    /// The mark itself
    pub value: f32,

    /// Foreign key to the graded student
    pub student_id: i64,

    /// Foreign key to the course the grade was given in
    pub course_id: i64,
}

impl Grade {
    /// Create a Grade from already-known field values
    pub fn new(id: i64, value: f32, student_id: i64, course_id: i64) -> Self {
        Self {
            id,
            value,
            student_id,
            course_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_equality() {
        assert_eq!(Grade::new(1, 5.0, 10, 20), Grade::new(1, 5.0, 10, 20));
        assert_ne!(Grade::new(1, 5.0, 10, 20), Grade::new(1, 4.5, 10, 20));
    }
}
