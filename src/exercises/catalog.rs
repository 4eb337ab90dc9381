//! Exercise catalog storage.

use rusqlite::{params, Connection, OptionalExtension};

use super::types::Exercise;
use crate::storage::StoreError;

/// Manager for the exercise catalog.
pub struct ExerciseCatalog<'a> {
    conn: &'a Connection,
}

impl<'a> ExerciseCatalog<'a> {
    /// Create a new catalog manager with a database connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Add an exercise to the catalog.
    pub fn add(&self, exercise: &Exercise) -> Result<(), StoreError> {
        exercise.validate()?;

        self.conn
            .execute(
                "INSERT INTO exercise_categories (exercise_name, muscle_group, set_number, rep_number)
                 VALUES (?1, ?2, ?3, ?4)",
                params![exercise.name, exercise.muscle_group, exercise.sets, exercise.reps],
            )
            .map_err(|e| StoreError::from_insert(e, "exercise"))?;

        tracing::debug!(name = %exercise.name, "Added exercise");
        Ok(())
    }

    /// Get an exercise by name.
    pub fn get(&self, name: &str) -> Result<Option<Exercise>, StoreError> {
        self.conn
            .query_row(
                "SELECT exercise_name, muscle_group, set_number, rep_number
                 FROM exercise_categories WHERE exercise_name = ?1",
                params![name],
                parse_exercise_row,
            )
            .optional()
            .map_err(StoreError::from)
    }

    /// List every exercise in insertion order.
    pub fn list(&self) -> Result<Vec<Exercise>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT exercise_name, muscle_group, set_number, rep_number
             FROM exercise_categories ORDER BY rowid",
        )?;

        let exercises = stmt
            .query_map([], parse_exercise_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(exercises)
    }

    /// Delete an exercise by name.
    ///
    /// Routine entries and progress records naming the exercise are left in place.
    pub fn delete(&self, name: &str) -> Result<(), StoreError> {
        let deleted = self.conn.execute(
            "DELETE FROM exercise_categories WHERE exercise_name = ?1",
            params![name],
        )?;

        if deleted == 0 {
            return Err(StoreError::NotFound("Exercise".to_string()));
        }

        tracing::debug!(%name, "Deleted exercise");
        Ok(())
    }
}

/// Parse a database row into an Exercise.
///
/// Columns are nullable in the schema; missing values read as empty/zero.
fn parse_exercise_row(row: &rusqlite::Row) -> rusqlite::Result<Exercise> {
    Ok(Exercise {
        name: row.get(0)?,
        muscle_group: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
        sets: row.get::<_, Option<i64>>(2)?.unwrap_or(0),
        reps: row.get::<_, Option<i64>>(3)?.unwrap_or(0),
    })
}
