//! Input validation shared by the record types and the menu.

use crate::storage::StoreError;

pub const NON_NUMERIC_COUNT: &str = "Please enter valid numeric values for set and rep numbers.";
pub const NON_POSITIVE_COUNT: &str = "Set and rep numbers must be positive integers.";

/// Reject empty (or whitespace-only) text with the given message.
pub fn require_text(value: &str, message: &str) -> Result<(), StoreError> {
    if value.trim().is_empty() {
        return Err(StoreError::Validation(message.to_string()));
    }
    Ok(())
}

/// Reject counts below one.
pub fn require_positive(sets: i64, reps: i64) -> Result<(), StoreError> {
    if sets < 1 || reps < 1 {
        return Err(StoreError::Validation(NON_POSITIVE_COUNT.to_string()));
    }
    Ok(())
}

/// Parse a set or rep count typed by the user.
///
/// Text that is not an integer fails with [`NON_NUMERIC_COUNT`]; integers below one fail with
/// [`NON_POSITIVE_COUNT`].
pub fn parse_count(raw: &str) -> Result<i64, StoreError> {
    let value: i64 = raw
        .trim()
        .parse()
        .map_err(|_| StoreError::Validation(NON_NUMERIC_COUNT.to_string()))?;

    if value < 1 {
        return Err(StoreError::Validation(NON_POSITIVE_COUNT.to_string()));
    }
    Ok(value)
}
