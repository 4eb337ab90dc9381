//! Progress log storage.

use rusqlite::{params, Connection};

use super::types::ProgressRecord;
use crate::storage::StoreError;

/// Append-only access to the progress table.
pub struct ProgressLog<'a> {
    conn: &'a Connection,
}

impl<'a> ProgressLog<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Append a record. Identical records are allowed.
    pub fn record(&self, record: &ProgressRecord) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT INTO progress (exercise_name, date, sets_completed, reps_completed)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                record.exercise_name,
                record.date,
                record.sets_completed,
                record.reps_completed
            ],
        )?;

        tracing::debug!(exercise = %record.exercise_name, date = %record.date, "Recorded progress");
        Ok(())
    }

    /// All records in insertion order.
    pub fn list(&self) -> Result<Vec<ProgressRecord>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT exercise_name, date, sets_completed, reps_completed
             FROM progress ORDER BY rowid",
        )?;

        let records = stmt
            .query_map([], |row| {
                Ok(ProgressRecord {
                    exercise_name: row.get::<_, Option<String>>(0)?.unwrap_or_default(),
                    date: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
                    sets_completed: row.get::<_, Option<i64>>(2)?.unwrap_or(0),
                    reps_completed: row.get::<_, Option<i64>>(3)?.unwrap_or(0),
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(records)
    }
}
