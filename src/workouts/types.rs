//! Workout routine types.

use crate::storage::StoreError;
use crate::validation::{require_positive, require_text};
use std::fmt;

/// One exercise assigned to a named routine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutineEntry {
    /// Routine this entry belongs to
    pub routine_name: String,
    /// Exercise name (not checked against the catalog)
    pub exercise_name: String,
    /// Prescribed sets
    pub sets: i64,
    /// Prescribed repetitions per set
    pub reps: i64,
}

impl RoutineEntry {
    /// Create a new routine entry.
    pub fn new(
        routine_name: impl Into<String>,
        exercise_name: impl Into<String>,
        sets: i64,
        reps: i64,
    ) -> Self {
        Self {
            routine_name: routine_name.into(),
            exercise_name: exercise_name.into(),
            sets,
            reps,
        }
    }

    pub fn validate(&self) -> Result<(), StoreError> {
        require_text(&self.routine_name, "Routine name cannot be empty.")?;
        require_text(&self.exercise_name, "Exercise name cannot be empty.")?;
        require_positive(self.sets, self.reps)
    }
}

/// Displays the indented line used under a routine heading.
impl fmt::Display for RoutineEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "  Exercise Name: {}, Set Number: {}, Rep Number: {}",
            self.exercise_name, self.sets, self.reps
        )
    }
}

/// A named routine with all of its entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Routine {
    pub name: String,
    pub entries: Vec<RoutineEntry>,
}

impl Routine {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }
}

impl fmt::Display for Routine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Routine Name: {}", self.name)?;
        for entry in &self.entries {
            write!(f, "\n{}", entry)?;
        }
        Ok(())
    }
}
