//! Fitness goal type definitions.

use crate::storage::StoreError;
use crate::validation::require_text;
use std::fmt;

/// A fitness goal set by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Goal {
    /// Unique goal name
    pub name: String,
    /// What the goal is about
    pub description: String,
    /// Target date as entered; the format is not checked
    pub target_date: String,
}

impl Goal {
    /// Create a new goal.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        target_date: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            target_date: target_date.into(),
        }
    }

    /// Check that every field is present.
    pub fn validate(&self) -> Result<(), StoreError> {
        require_text(&self.name, "Goal name cannot be empty.")?;
        require_text(&self.description, "Description cannot be empty.")?;
        require_text(&self.target_date, "Target date cannot be empty.")
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Goal Name: {}, Description: {}, Target Date: {}",
            self.name, self.description, self.target_date
        )
    }
}
