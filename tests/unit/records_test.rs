//! Unit tests for record types and their console lines.

use fittrack::{Exercise, Goal, ProgressRecord, Routine, RoutineEntry, StoreError};

#[test]
fn test_exercise_line() {
    let exercise = Exercise::new("Bench Press", "Chest", 3, 8);
    assert_eq!(
        exercise.to_string(),
        "Exercise Name: Bench Press, Muscle Group: Chest, Set Number: 3, Rep Number: 8"
    );
}

#[test]
fn test_goal_line() {
    let goal = Goal::new("Build Muscle", "Gain 3 kg of muscle in 3 months", "2024-07-04");
    assert_eq!(
        goal.to_string(),
        "Goal Name: Build Muscle, Description: Gain 3 kg of muscle in 3 months, Target Date: 2024-07-04"
    );
}

#[test]
fn test_progress_line() {
    let record = ProgressRecord::new("Deadlift", "2023-07-03", 4, 6);
    assert_eq!(
        record.to_string(),
        "Exercise Name: Deadlift, Date: 2023-07-03, Sets Completed: 4, Reps Completed: 6"
    );
}

#[test]
fn test_routine_block() {
    let routine = Routine {
        name: "Full Body Routine".to_string(),
        entries: vec![
            RoutineEntry::new("Full Body Routine", "Squat", 3, 10),
            RoutineEntry::new("Full Body Routine", "Deadlift", 4, 6),
        ],
    };

    let lines: Vec<String> = routine.to_string().lines().map(String::from).collect();
    assert_eq!(
        lines,
        vec![
            "Routine Name: Full Body Routine",
            "  Exercise Name: Squat, Set Number: 3, Rep Number: 10",
            "  Exercise Name: Deadlift, Set Number: 4, Rep Number: 6",
        ]
    );
}

#[test]
fn test_routine_without_entries() {
    assert_eq!(Routine::new("Empty").to_string(), "Routine Name: Empty");
}

#[test]
fn test_validation_messages() {
    let cases = [
        (Exercise::new("", "Legs", 1, 1).validate(), "Error: Exercise name cannot be empty."),
        (Exercise::new("Squat", "", 1, 1).validate(), "Error: Muscle group cannot be empty."),
        (
            Exercise::new("Squat", "Legs", 1, 0).validate(),
            "Error: Set and rep numbers must be positive integers.",
        ),
        (Goal::new("", "d", "t").validate(), "Error: Goal name cannot be empty."),
    ];

    for (result, expected) in cases {
        assert_eq!(result.unwrap_err().to_string(), expected);
    }
}

#[test]
fn test_storage_error_message() {
    let err = StoreError::Storage("disk I/O error".to_string());
    assert_eq!(err.to_string(), "An unexpected error occurred: disk I/O error");
}
