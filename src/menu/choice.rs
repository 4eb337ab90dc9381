//! Main menu choices.

use std::fmt;
use std::str::FromStr;

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddExercise,
    ViewExercises,
    DeleteExercise,
    CreateWorkoutRoutine,
    ViewWorkoutRoutine,
    ViewExerciseProgress,
    SetFitnessGoal,
    ViewFitnessGoals,
    Quit,
}

impl MenuChoice {
    /// All choices in menu order.
    pub const ALL: [MenuChoice; 9] = [
        MenuChoice::AddExercise,
        MenuChoice::ViewExercises,
        MenuChoice::DeleteExercise,
        MenuChoice::CreateWorkoutRoutine,
        MenuChoice::ViewWorkoutRoutine,
        MenuChoice::ViewExerciseProgress,
        MenuChoice::SetFitnessGoal,
        MenuChoice::ViewFitnessGoals,
        MenuChoice::Quit,
    ];

    /// The number typed to select this choice.
    pub fn key(&self) -> usize {
        Self::ALL
            .iter()
            .position(|c| c == self)
            .map(|i| i + 1)
            .unwrap_or_default()
    }

    /// Menu label.
    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::AddExercise => "Add Exercise Category",
            MenuChoice::ViewExercises => "View Exercises",
            MenuChoice::DeleteExercise => "Delete Exercise",
            MenuChoice::CreateWorkoutRoutine => "Create Workout Routine",
            MenuChoice::ViewWorkoutRoutine => "View Workout Routine",
            MenuChoice::ViewExerciseProgress => "View Exercise Progress",
            MenuChoice::SetFitnessGoal => "Set Fitness Goals",
            MenuChoice::ViewFitnessGoals => "View Progress Towards Fitness Goals",
            MenuChoice::Quit => "Quit",
        }
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.key(), self.label())
    }
}

/// Input that is not exactly one of "1".."9".
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid choice, please try again.")]
pub struct InvalidChoice;

impl FromStr for MenuChoice {
    type Err = InvalidChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|choice| choice.key().to_string() == s)
            .ok_or(InvalidChoice)
    }
}

/// The full menu text, ending with the input marker.
pub fn menu_text() -> String {
    let mut text = String::from("\n--- Main Menu ---\n");
    for choice in MenuChoice::ALL {
        text.push_str(&choice.to_string());
        text.push('\n');
    }
    text.push(':');
    text
}
