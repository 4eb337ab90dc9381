//! Interactive text menu.
//!
//! The menu reads a choice, runs the matching action against the store and repeats until
//! the user quits or input ends. Action errors are printed and never end the loop.

pub mod actions;
pub mod choice;
pub mod prompt;

use std::io::{BufRead, Write};

pub use choice::{menu_text, InvalidChoice, MenuChoice};
pub use prompt::Prompt;

use crate::storage::{Database, StoreError};

/// Errors that can end a menu action early.
#[derive(Debug, thiserror::Error)]
pub enum MenuError {
    /// Reported to the user; the menu continues.
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input stream closed; treated like Quit.
    #[error("End of input")]
    EndOfInput,
}

/// The main menu loop.
pub struct Menu<R, W> {
    prompt: Prompt<R, W>,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            prompt: Prompt::new(input, output),
        }
    }

    /// Run until Quit or end of input, then close the store.
    pub fn run(&mut self, db: Database) -> Result<(), MenuError> {
        loop {
            let raw = match self.prompt.ask(&menu_text()) {
                Ok(raw) => raw,
                Err(MenuError::EndOfInput) => break,
                Err(e) => return Err(e),
            };

            let choice = match raw.parse::<MenuChoice>() {
                Ok(MenuChoice::Quit) => {
                    self.prompt.say("Goodbye!")?;
                    break;
                }
                Ok(choice) => choice,
                Err(invalid) => {
                    self.prompt.say(invalid)?;
                    continue;
                }
            };

            tracing::debug!(?choice, "Dispatching menu choice");
            match self.dispatch(choice, &db) {
                Ok(()) => {}
                Err(MenuError::Store(e)) => {
                    if let StoreError::Storage(detail) = &e {
                        tracing::warn!(%detail, ?choice, "Storage failure");
                    }
                    self.prompt.say(e)?;
                }
                Err(MenuError::EndOfInput) => break,
                Err(e) => return Err(e),
            }
        }

        db.close()?;
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice, db: &Database) -> Result<(), MenuError> {
        let prompt = &mut self.prompt;
        match choice {
            MenuChoice::AddExercise => actions::add_exercise(prompt, db),
            MenuChoice::ViewExercises => actions::view_exercises(prompt, db),
            MenuChoice::DeleteExercise => actions::delete_exercise(prompt, db),
            MenuChoice::CreateWorkoutRoutine => actions::create_workout_routine(prompt, db),
            MenuChoice::ViewWorkoutRoutine => actions::view_workout_routines(prompt, db),
            MenuChoice::ViewExerciseProgress => actions::view_exercise_progress(prompt, db),
            MenuChoice::SetFitnessGoal => actions::set_fitness_goal(prompt, db),
            MenuChoice::ViewFitnessGoals => actions::view_fitness_goals(prompt, db),
            MenuChoice::Quit => Ok(()),
        }
    }

    pub fn into_output(self) -> W {
        self.prompt.into_output()
    }
}
