//! Exercise type definitions.

use crate::storage::StoreError;
use crate::validation::{require_positive, require_text};
use std::fmt;

/// A catalog exercise with its default prescription.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    /// Unique exercise name
    pub name: String,
    /// Muscle group worked
    pub muscle_group: String,
    /// Default number of sets
    pub sets: i64,
    /// Default repetitions per set
    pub reps: i64,
}

impl Exercise {
    /// Create a new exercise.
    pub fn new(
        name: impl Into<String>,
        muscle_group: impl Into<String>,
        sets: i64,
        reps: i64,
    ) -> Self {
        Self {
            name: name.into(),
            muscle_group: muscle_group.into(),
            sets,
            reps,
        }
    }

    /// Check that name and group are present and counts are positive.
    pub fn validate(&self) -> Result<(), StoreError> {
        require_text(&self.name, "Exercise name cannot be empty.")?;
        require_text(&self.muscle_group, "Muscle group cannot be empty.")?;
        require_positive(self.sets, self.reps)
    }
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Exercise Name: {}, Muscle Group: {}, Set Number: {}, Rep Number: {}",
            self.name, self.muscle_group, self.sets, self.reps
        )
    }
}
