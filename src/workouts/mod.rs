//! Workout routines module.
//!
//! A routine is a named set of exercises, each with its own set/rep prescription.

pub mod manager;
pub mod types;

pub use manager::RoutineManager;
pub use types::{Routine, RoutineEntry};
