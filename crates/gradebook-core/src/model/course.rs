use serde::{Deserialize, Serialize};

/// Course - identified by a globally unique name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Course {
    /// Store-assigned identifier (positive)
    pub id: i64,

    /// Globally unique course name (non-empty)
    pub name: String,
}

impl Course {
    /// Create a Course from already-known field values
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
