use serde::{Deserialize, Serialize};

/// Student - a person identified by a globally unique index number
///
/// Immutable after construction; equality covers all fields including the id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Student {
    /// Store-assigned identifier (positive)
    pub id: i64,

    /// Given name (non-empty)
    pub first_name: String,

    /// Family name (non-empty)
    pub last_name: String,

    /// Globally unique index number (positive)
    pub index_number: i64,
}

impl Student {
    /// Create a Student from already-known field values
    pub fn new(
        id: i64,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        index_number: i64,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            index_number,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_equality() {
        let a = Student::new(1, "Adam", "Kowalski", 100_122);
        let b = Student::new(1, "Adam", "Kowalski", 100_122);
        assert_eq!(a, b);

        let c = Student::new(2, "Adam", "Kowalski", 100_122);
        assert_ne!(a, c);
    }
}
