//! Exercise catalog module.
//!
//! Exercises are keyed by name and carry a default set/rep prescription.

pub mod catalog;
pub mod types;

pub use catalog::ExerciseCatalog;
pub use types::Exercise;
