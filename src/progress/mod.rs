//! Exercise progress log.
//!
//! Records are append-only: there is no update or delete path.

pub mod log;
pub mod types;

pub use log::ProgressLog;
pub use types::ProgressRecord;
