//! Integration tests for full menu sessions.
//!
//! Each test scripts stdin for a whole session, runs the menu to completion and checks
//! the printed transcript.

use std::io::Cursor;

use fittrack::{Database, Menu};

/// Run a scripted session against `db` and return the transcript.
fn run_session(db: Database, script: &str) -> String {
    let mut menu = Menu::new(Cursor::new(script.to_string()), Vec::new());
    menu.run(db).expect("menu should finish cleanly");
    String::from_utf8(menu.into_output()).unwrap()
}

fn empty_db() -> Database {
    Database::open_in_memory().expect("Failed to create database")
}

#[test]
fn test_quit_says_goodbye() {
    let out = run_session(empty_db(), "9\n");

    assert!(out.starts_with("\n--- Main Menu ---\n1. Add Exercise Category\n"));
    assert!(out.ends_with(":Goodbye!\n"));
}

#[test]
fn test_end_of_input_ends_session() {
    let out = run_session(empty_db(), "2\n");
    assert!(out.contains("No exercises found.\n"));
    assert!(!out.contains("Goodbye!"));
}

#[test]
fn test_invalid_choice_reprompts() {
    let out = run_session(empty_db(), "42\nhello\n9\n");

    assert_eq!(out.matches("Invalid choice, please try again.\n").count(), 2);
    assert_eq!(out.matches("--- Main Menu ---").count(), 3);
}

#[test]
fn test_invalid_utf8_choice_reprompts() {
    let mut menu = Menu::new(Cursor::new(vec![0xff, b'\n', b'9', b'\n']), Vec::new());
    menu.run(empty_db()).expect("menu should finish cleanly");
    let out = String::from_utf8(menu.into_output()).unwrap();

    let invalid = out.find("Invalid choice, please try again.\n").unwrap();
    let goodbye = out.find("Goodbye!\n").unwrap();
    assert!(invalid < goodbye);
}

#[test]
fn test_padded_choice_is_invalid() {
    let out = run_session(empty_db(), "01\n+2\n9\n");
    assert_eq!(out.matches("Invalid choice, please try again.\n").count(), 2);
    assert!(!out.contains("Exercise Categories"));
}

#[test]
fn test_legacy_routine_counts_listed() {
    let db = empty_db();
    db.connection()
        .execute_batch(
            "INSERT INTO workout_routines VALUES ('Old', 'Squat', -3, 10);
             INSERT INTO workout_routines VALUES ('Good', 'Row', 3, 10);",
        )
        .unwrap();

    let out = run_session(db, "5\n9\n");
    assert!(out.contains("Routine Name: Old\n  Exercise Name: Squat, Set Number: -3, Rep Number: 10"));
    assert!(out.contains("Routine Name: Good\n  Exercise Name: Row, Set Number: 3, Rep Number: 10"));
    assert!(!out.contains("An unexpected error occurred"));
}

#[test]
fn test_add_then_view_exercise() {
    let out = run_session(empty_db(), "1\nLunge\nLegs\n3\n12\n2\n9\n");

    assert!(out.contains("Category was added SUCCESSFULLY!\n"));
    assert!(out.contains("Exercise Categories:\n"));
    assert_eq!(
        out.matches("Exercise Name: Lunge, Muscle Group: Legs, Set Number: 3, Rep Number: 12\n")
            .count(),
        1
    );
}

#[test]
fn test_duplicate_exercise_reported_and_loop_continues() {
    let script = "1\nSquat\nLegs\n3\n10\n1\nSquat\nBack\n4\n4\n2\n9\n";
    let out = run_session(empty_db(), script);

    assert!(out.contains("This exercise already exists.\n"));
    assert!(out.contains("Exercise Name: Squat, Muscle Group: Legs, Set Number: 3, Rep Number: 10\n"));
    assert!(!out.contains("Muscle Group: Back"));
    assert!(out.ends_with("Goodbye!\n"));
}

#[test]
fn test_invalid_counts_reported() {
    let out = run_session(empty_db(), "1\nLunge\nLegs\nabc\n1\nLunge\nLegs\n-1\n9\n");

    assert!(out.contains("Error: Please enter valid numeric values for set and rep numbers.\n"));
    assert!(out.contains("Error: Set and rep numbers must be positive integers.\n"));
    assert!(!out.contains("Category was added SUCCESSFULLY!"));
}

#[test]
fn test_delete_missing_exercise() {
    let out = run_session(empty_db(), "3\nBurpee\n9\n");

    assert!(out.contains("No exercises found.\n"));
    assert!(out.contains("Exercise not found.\n"));
}

#[test]
fn test_delete_existing_exercise() {
    let db = empty_db();
    db.seed_sample_data().unwrap();
    let out = run_session(db, "3\nSquat\n2\n9\n");

    assert!(out.contains("Exercise Squat was deleted SUCCESSFULLY!\n"));
    let after_delete = &out[out.find("was deleted").unwrap()..];
    assert!(!after_delete.contains("Exercise Name: Squat"));
}

#[test]
fn test_create_and_view_routine() {
    let out = run_session(empty_db(), "4\nR1\nSquat\n3\n10\ndone\n5\n9\n");

    assert!(out.contains("Workout routine was created SUCCESSFULLY!\n"));
    assert!(out.contains(
        "Workout Routines:\nRoutine Name: R1\n  Exercise Name: Squat, Set Number: 3, Rep Number: 10\n"
    ));
    assert_eq!(out.matches("  Exercise Name:").count(), 1);
}

#[test]
fn test_duplicate_goal_rejected() {
    let script = "7\nCut\nLose 5 kg\n2025-06-01\n7\nCut\nLose 9 kg\n2025-12-01\n8\n9\n";
    let out = run_session(empty_db(), script);

    assert_eq!(out.matches("Fitness goal was set SUCCESSFULLY!\n").count(), 1);
    assert!(out.contains("This goal already exists.\n"));
    assert!(out.contains("Goal Name: Cut, Description: Lose 5 kg, Target Date: 2025-06-01\n"));
    assert!(!out.contains("Lose 9 kg, Target"));
}

#[test]
fn test_empty_progress_message() {
    let out = run_session(empty_db(), "6\n9\n");
    assert!(out.contains(
        "Hi, This is the view exercise progress section!\nNo progress records found.\n"
    ));
}

#[test]
fn test_seeded_progress_listed() {
    let db = empty_db();
    db.seed_sample_data().unwrap();
    let out = run_session(db, "6\n9\n");

    assert!(out.contains("Exercise Progress:\n"));
    assert!(out.contains("Exercise Name: Squat, Date: 2023-07-01, Sets Completed: 3, Reps Completed: 10\n"));
    assert_eq!(out.matches("Sets Completed:").count(), 3);
}

#[test]
fn test_session_closes_file_database() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("tracker.db");

    let db = Database::open(&path, false).unwrap();
    run_session(db, "1\nRow\nBack\n4\n8\n9\n");

    let reopened = Database::open(&path, false).unwrap();
    let out = run_session(reopened, "2\n9\n");
    assert!(out.contains("Exercise Name: Row, Muscle Group: Back, Set Number: 4, Rep Number: 8\n"));
}
