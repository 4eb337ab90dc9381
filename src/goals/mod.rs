//! Fitness goals module.
//!
//! Goals are named targets with a free-text description and a target date. They are
//! tracked independently of progress records.

pub mod manager;
pub mod types;

pub use manager::GoalManager;
pub use types::Goal;
