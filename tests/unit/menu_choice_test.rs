//! Unit tests for menu choice parsing.

use fittrack::menu::{menu_text, InvalidChoice};
use fittrack::MenuChoice;

#[test]
fn test_keys_match_menu_order() {
    assert_eq!(MenuChoice::AddExercise.key(), 1);
    assert_eq!(MenuChoice::ViewFitnessGoals.key(), 8);
    assert_eq!(MenuChoice::Quit.key(), 9);
}

#[test]
fn test_display_matches_menu_line() {
    assert_eq!(MenuChoice::DeleteExercise.to_string(), "3. Delete Exercise");
    assert_eq!(MenuChoice::SetFitnessGoal.to_string(), "7. Set Fitness Goals");
}

#[test]
fn test_every_choice_listed_once() {
    let text = menu_text();
    for choice in MenuChoice::ALL {
        assert_eq!(text.matches(&choice.to_string()).count(), 1, "{choice}");
    }
}

#[test]
fn test_invalid_choice_message() {
    assert_eq!(InvalidChoice.to_string(), "Invalid choice, please try again.");
    assert_eq!("abc".parse::<MenuChoice>(), Err(InvalidChoice));
}
