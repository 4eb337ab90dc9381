//! Workout routine management.

use rusqlite::{params, Connection};

use super::types::{Routine, RoutineEntry};
use crate::storage::StoreError;

/// Manager for workout routines.
pub struct RoutineManager<'a> {
    conn: &'a Connection,
}

impl<'a> RoutineManager<'a> {
    /// Create a new routine manager with a database connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Add one exercise to a routine.
    ///
    /// A routine exists as soon as it has one entry; there is no separate routine row.
    pub fn add_entry(&self, entry: &RoutineEntry) -> Result<(), StoreError> {
        entry.validate()?;

        self.conn
            .execute(
                "INSERT INTO workout_routines (routine_name, exercise_name, set_number, rep_number)
                 VALUES (?1, ?2, ?3, ?4)",
                params![entry.routine_name, entry.exercise_name, entry.sets, entry.reps],
            )
            .map_err(|e| StoreError::from_insert(e, "routine entry"))?;

        tracing::debug!(
            routine = %entry.routine_name,
            exercise = %entry.exercise_name,
            "Added routine entry"
        );
        Ok(())
    }

    /// Distinct routine names in first-seen order.
    pub fn routine_names(&self) -> Result<Vec<String>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT routine_name FROM workout_routines
             GROUP BY routine_name ORDER BY MIN(rowid)",
        )?;

        let names = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;

        Ok(names)
    }

    /// All entries of one routine in insertion order.
    pub fn entries(&self, routine_name: &str) -> Result<Vec<RoutineEntry>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT routine_name, exercise_name, set_number, rep_number
             FROM workout_routines WHERE routine_name = ?1 ORDER BY rowid",
        )?;

        let entries = stmt
            .query_map(params![routine_name], parse_entry_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(entries)
    }

    /// Every routine with its entries.
    pub fn list(&self) -> Result<Vec<Routine>, StoreError> {
        self.routine_names()?
            .into_iter()
            .map(|name| -> Result<Routine, StoreError> {
                let entries = self.entries(&name)?;
                Ok(Routine { name, entries })
            })
            .collect()
    }
}

fn parse_entry_row(row: &rusqlite::Row) -> rusqlite::Result<RoutineEntry> {
    Ok(RoutineEntry {
        routine_name: row.get(0)?,
        exercise_name: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
        sets: row.get::<_, Option<i64>>(2)?.unwrap_or(0),
        reps: row.get::<_, Option<i64>>(3)?.unwrap_or(0),
    })
}
