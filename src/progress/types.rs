//! Progress record types.

use std::fmt;

/// A dated log entry of completed sets and reps for an exercise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressRecord {
    /// Exercise name; not required to exist in the catalog
    pub exercise_name: String,
    /// Date as entered
    pub date: String,
    pub sets_completed: i64,
    pub reps_completed: i64,
}

impl ProgressRecord {
    pub fn new(
        exercise_name: impl Into<String>,
        date: impl Into<String>,
        sets_completed: i64,
        reps_completed: i64,
    ) -> Self {
        Self {
            exercise_name: exercise_name.into(),
            date: date.into(),
            sets_completed,
            reps_completed,
        }
    }
}

impl fmt::Display for ProgressRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Exercise Name: {}, Date: {}, Sets Completed: {}, Reps Completed: {}",
            self.exercise_name, self.date, self.sets_completed, self.reps_completed
        )
    }
}
