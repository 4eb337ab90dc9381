//! FitTrack - Single-user Fitness Tracker
//!
//! Keeps an exercise catalog, named workout routines, fitness goals and a progress log in
//! a local SQLite file, and drives them from an interactive text menu.

pub mod exercises;
pub mod goals;
pub mod menu;
pub mod progress;
pub mod storage;
pub mod validation;
pub mod workouts;

// Re-export commonly used types
pub use exercises::{Exercise, ExerciseCatalog};
pub use goals::{Goal, GoalManager};
pub use menu::{Menu, MenuChoice, MenuError};
pub use progress::{ProgressLog, ProgressRecord};
pub use storage::{AppConfig, Database, StoreError};
pub use workouts::{Routine, RoutineEntry, RoutineManager};
