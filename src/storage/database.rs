//! Database operations using rusqlite.
//!
//! `Database` owns the single SQLite connection for the lifetime of the process.
//! Record managers (`ExerciseCatalog`, `RoutineManager`, `GoalManager`, `ProgressLog`)
//! borrow it through [`Database::connection`].

use crate::progress::{ProgressLog, ProgressRecord};
use crate::storage::schema::{
    SAMPLE_EXERCISES, SAMPLE_GOALS, SAMPLE_PROGRESS, SAMPLE_ROUTINE_ENTRIES, SCHEMA,
    SENTINEL_TABLE,
};
use rusqlite::{params, Connection, ErrorCode};
use std::path::Path;
use thiserror::Error;

/// Database wrapper for SQLite operations.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open or create a database at the given path.
    ///
    /// Tables are created if absent. When `seed_sample_data` is set and the tables did not
    /// exist before this call, the fixed sample rows are inserted.
    pub fn open(path: &Path, seed_sample_data: bool) -> Result<Self, StoreError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| StoreError::Storage(e.to_string()))?;
            }
        }

        let mut conn = Connection::open(path).map_err(|e| StoreError::Storage(e.to_string()))?;

        // Tables and sample rows commit together
        let tx = conn.transaction()?;
        let first_run = create_tables(&tx)?;
        if first_run && seed_sample_data {
            insert_sample_rows(&tx)?;
        }
        tx.commit()?;

        tracing::info!(path = %path.display(), first_run, "Opened tracker database");
        Ok(Self { conn })
    }

    /// Open an empty in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn =
            Connection::open_in_memory().map_err(|e| StoreError::Storage(e.to_string()))?;

        create_tables(&conn)?;

        Ok(Self { conn })
    }

    /// Insert the fixed sample rows.
    ///
    /// Keyed tables use `INSERT OR IGNORE`, so rows that already exist are left untouched.
    /// Progress has no key and always receives the sample rows.
    pub fn seed_sample_data(&self) -> Result<(), StoreError> {
        insert_sample_rows(&self.conn)
    }

    /// Get a reference to the underlying connection.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Close the connection, releasing the database file.
    pub fn close(self) -> Result<(), StoreError> {
        self.conn
            .close()
            .map_err(|(_, e)| StoreError::Storage(e.to_string()))?;
        tracing::info!("Closed tracker database");
        Ok(())
    }
}

/// Create all tables. Returns true when the schema did not exist yet.
fn create_tables(conn: &Connection) -> Result<bool, StoreError> {
    let existing: i64 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
        params![SENTINEL_TABLE],
        |row| row.get(0),
    )?;

    conn.execute_batch(SCHEMA)?;

    Ok(existing == 0)
}

fn insert_sample_rows(conn: &Connection) -> Result<(), StoreError> {
    for (name, group, sets, reps) in SAMPLE_EXERCISES {
        conn.execute(
            "INSERT OR IGNORE INTO exercise_categories VALUES (?1, ?2, ?3, ?4)",
            params![name, group, sets, reps],
        )?;
    }

    for (routine, exercise, sets, reps) in SAMPLE_ROUTINE_ENTRIES {
        conn.execute(
            "INSERT OR IGNORE INTO workout_routines VALUES (?1, ?2, ?3, ?4)",
            params![routine, exercise, sets, reps],
        )?;
    }

    for (name, description, target_date) in SAMPLE_GOALS {
        conn.execute(
            "INSERT OR IGNORE INTO fitness_goals VALUES (?1, ?2, ?3)",
            params![name, description, target_date],
        )?;
    }

    let log = ProgressLog::new(conn);
    for (exercise, date, sets, reps) in SAMPLE_PROGRESS {
        log.record(&ProgressRecord::new(*exercise, *date, *sets, *reps))?;
    }

    tracing::info!("Seeded sample data");
    Ok(())
}

/// Errors surfaced by tracker operations.
///
/// The display strings are the messages shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Rejected input (empty field, bad count).
    #[error("Error: {0}")]
    Validation(String),

    /// No row matched; holds the capitalized entity name.
    #[error("{0} not found.")]
    NotFound(String),

    /// Unique key already taken; holds the lowercase entity name.
    #[error("This {0} already exists.")]
    Duplicate(String),

    #[error("An unexpected error occurred: {0}")]
    Storage(String),
}

impl StoreError {
    /// Classify an insert failure, mapping constraint violations to `Duplicate`.
    pub fn from_insert(err: rusqlite::Error, entity: &str) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(e, _) if e.code == ErrorCode::ConstraintViolation => {
                StoreError::Duplicate(entity.to_string())
            }
            _ => StoreError::Storage(err.to_string()),
        }
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        StoreError::Storage(err.to_string())
    }
}
