//! Fitness goal management.

use rusqlite::{params, Connection, OptionalExtension};

use super::types::Goal;
use crate::storage::StoreError;

/// Manager for fitness goals.
pub struct GoalManager<'a> {
    conn: &'a Connection,
}

impl<'a> GoalManager<'a> {
    /// Create a new goal manager with a database connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Create a new goal. Goal names are unique.
    pub fn create(&self, goal: &Goal) -> Result<(), StoreError> {
        goal.validate()?;

        self.conn
            .execute(
                "INSERT INTO fitness_goals (goal_name, description, target_date)
                 VALUES (?1, ?2, ?3)",
                params![goal.name, goal.description, goal.target_date],
            )
            .map_err(|e| StoreError::from_insert(e, "goal"))?;

        tracing::debug!(name = %goal.name, "Created goal");
        Ok(())
    }

    /// Get a goal by name.
    pub fn get(&self, name: &str) -> Result<Option<Goal>, StoreError> {
        self.conn
            .query_row(
                "SELECT goal_name, description, target_date FROM fitness_goals WHERE goal_name = ?1",
                params![name],
                parse_goal_row,
            )
            .optional()
            .map_err(StoreError::from)
    }

    /// Get all goals in insertion order.
    pub fn list(&self) -> Result<Vec<Goal>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT goal_name, description, target_date FROM fitness_goals ORDER BY rowid",
        )?;

        let goals = stmt
            .query_map([], parse_goal_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(goals)
    }
}

/// Parse a database row into a Goal.
fn parse_goal_row(row: &rusqlite::Row) -> rusqlite::Result<Goal> {
    Ok(Goal {
        name: row.get(0)?,
        description: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
        target_date: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
    })
}
