//! The eight menu operations.
//!
//! Each action validates its input, performs one store operation and reports the outcome.
//! Errors are returned to the menu loop, which prints them and carries on.

use std::io::{BufRead, Write};

use super::{MenuError, Prompt};
use crate::exercises::{Exercise, ExerciseCatalog};
use crate::goals::{Goal, GoalManager};
use crate::progress::ProgressLog;
use crate::storage::Database;
use crate::validation::{parse_count, require_text};
use crate::workouts::{RoutineEntry, RoutineManager};

/// Word that ends routine entry input, matched case-insensitively.
pub const DONE_SENTINEL: &str = "done";

pub fn add_exercise<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
    db: &Database,
) -> Result<(), MenuError> {
    prompt.say("Hi, This is the adding exercise category section!")?;

    let name = prompt.ask("Please enter the exercise name: ")?;
    require_text(&name, "Exercise name cannot be empty.")?;

    let muscle_group = prompt.ask("Please enter the muscle group: ")?;
    require_text(&muscle_group, "Muscle group cannot be empty.")?;

    let sets = parse_count(&prompt.ask("Please enter the set number: ")?)?;
    let reps = parse_count(&prompt.ask("Please enter the rep number: ")?)?;

    ExerciseCatalog::new(db.connection()).add(&Exercise::new(name, muscle_group, sets, reps))?;
    prompt.say("Category was added SUCCESSFULLY!")
}

pub fn view_exercises<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
    db: &Database,
) -> Result<(), MenuError> {
    prompt.say("Hi, This is the view exercise category section!")?;
    print_exercises(prompt, db)
}

fn print_exercises<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
    db: &Database,
) -> Result<(), MenuError> {
    let exercises = ExerciseCatalog::new(db.connection()).list()?;
    if exercises.is_empty() {
        return prompt.say("No exercises found.");
    }

    prompt.say("Exercise Categories:")?;
    for exercise in &exercises {
        prompt.say(exercise)?;
    }
    Ok(())
}

pub fn delete_exercise<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
    db: &Database,
) -> Result<(), MenuError> {
    prompt.say("Hi, This is the deleting exercise category section!")?;
    print_exercises(prompt, db)?;

    let name = prompt.ask("Please enter the exercise name you want to delete: ")?;
    if name.is_empty() {
        return prompt.say("Invalid input.");
    }

    ExerciseCatalog::new(db.connection()).delete(&name)?;
    prompt.say(format!("Exercise {} was deleted SUCCESSFULLY!", name))
}

pub fn create_workout_routine<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
    db: &Database,
) -> Result<(), MenuError> {
    prompt.say("Hi, This is the create workout routine section!")?;

    let routine_name = prompt.ask("Please enter the workout routine name: ")?;
    if routine_name.is_empty() {
        return prompt.say("Routine name cannot be empty.");
    }

    let routines = RoutineManager::new(db.connection());
    loop {
        let exercise_name = prompt.ask("Please enter the exercise name (or 'done' to finish): ")?;
        if exercise_name.eq_ignore_ascii_case(DONE_SENTINEL) {
            break;
        }

        // A failed entry is reported and skipped; the loop keeps going
        match read_routine_entry(prompt, &routine_name, exercise_name) {
            Ok(entry) => {
                if let Err(e) = routines.add_entry(&entry) {
                    prompt.say(e)?;
                }
            }
            Err(MenuError::Store(e)) => prompt.say(e)?,
            Err(e) => return Err(e),
        }
    }

    tracing::info!(routine = %routine_name, "Created workout routine");
    prompt.say("Workout routine was created SUCCESSFULLY!")
}

fn read_routine_entry<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
    routine_name: &str,
    exercise_name: String,
) -> Result<RoutineEntry, MenuError> {
    require_text(&exercise_name, "Exercise name cannot be empty.")?;
    let sets = parse_count(&prompt.ask("Please enter the set number: ")?)?;
    let reps = parse_count(&prompt.ask("Please enter the rep number: ")?)?;
    Ok(RoutineEntry::new(routine_name, exercise_name, sets, reps))
}

pub fn view_workout_routines<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
    db: &Database,
) -> Result<(), MenuError> {
    prompt.say("Hi, This is the view workout routine section!")?;

    let routines = RoutineManager::new(db.connection()).list()?;
    if routines.is_empty() {
        return prompt.say("No workout routines found.");
    }

    prompt.say("Workout Routines:")?;
    for routine in &routines {
        prompt.say(routine)?;
    }
    Ok(())
}

pub fn view_exercise_progress<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
    db: &Database,
) -> Result<(), MenuError> {
    prompt.say("Hi, This is the view exercise progress section!")?;

    let records = ProgressLog::new(db.connection()).list()?;
    if records.is_empty() {
        return prompt.say("No progress records found.");
    }

    prompt.say("Exercise Progress:")?;
    for record in &records {
        prompt.say(record)?;
    }
    Ok(())
}

pub fn set_fitness_goal<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
    db: &Database,
) -> Result<(), MenuError> {
    prompt.say("Hi, This is the set fitness goals section!")?;

    let name = prompt.ask("Please enter the goal name: ")?;
    require_text(&name, "Goal name cannot be empty.")?;

    let description = prompt.ask("Please enter the goal description: ")?;
    require_text(&description, "Description cannot be empty.")?;

    let target_date = prompt.ask("Please enter the target date (YYYY-MM-DD): ")?;
    require_text(&target_date, "Target date cannot be empty.")?;

    GoalManager::new(db.connection()).create(&Goal::new(name, description, target_date))?;
    prompt.say("Fitness goal was set SUCCESSFULLY!")
}

pub fn view_fitness_goals<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
    db: &Database,
) -> Result<(), MenuError> {
    prompt.say("Hi, This is the view progress towards fitness goals section!")?;

    let goals = GoalManager::new(db.connection()).list()?;
    if goals.is_empty() {
        return prompt.say("No fitness goals found.");
    }

    prompt.say("Fitness Goals:")?;
    for goal in &goals {
        prompt.say(goal)?;
    }
    Ok(())
}
