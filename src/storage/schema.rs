//! Database schema definitions for FitTrack.

/// SQL schema for creating all database tables.
///
/// Every statement is create-if-absent so the schema can be applied on each start.
pub const SCHEMA: &str = r#"
-- Exercise catalog
CREATE TABLE IF NOT EXISTS exercise_categories (
    exercise_name TEXT PRIMARY KEY,
    muscle_group TEXT,
    set_number INTEGER,
    rep_number INTEGER
);

-- Routine membership (one row per exercise in a named routine)
CREATE TABLE IF NOT EXISTS workout_routines (
    routine_name TEXT,
    exercise_name TEXT,
    set_number INTEGER,
    rep_number INTEGER,
    PRIMARY KEY (routine_name, exercise_name)
);

-- Fitness goals
CREATE TABLE IF NOT EXISTS fitness_goals (
    goal_name TEXT PRIMARY KEY,
    description TEXT,
    target_date TEXT
);

-- Progress log (append-only, exercise_name is not enforced)
CREATE TABLE IF NOT EXISTS progress (
    exercise_name TEXT,
    date TEXT,
    sets_completed INTEGER,
    reps_completed INTEGER
);
"#;

/// Table whose presence marks an already-initialized database.
pub const SENTINEL_TABLE: &str = "exercise_categories";

/// Sample catalog rows: (name, muscle group, sets, reps).
pub const SAMPLE_EXERCISES: &[(&str, &str, i64, i64)] = &[
    ("Squat", "Legs", 3, 10),
    ("Bench Press", "Chest", 3, 8),
    ("Deadlift", "Back", 4, 6),
];

/// Sample routine rows: (routine, exercise, sets, reps).
pub const SAMPLE_ROUTINE_ENTRIES: &[(&str, &str, i64, i64)] = &[
    ("Full Body Routine", "Squat", 3, 10),
    ("Full Body Routine", "Bench Press", 3, 8),
    ("Full Body Routine", "Deadlift", 4, 6),
];

/// Sample goal rows: (name, description, target date).
pub const SAMPLE_GOALS: &[(&str, &str, &str)] = &[(
    "Build Muscle",
    "Gain 3 kg of muscle in 3 months",
    "2024-07-04",
)];

/// Sample progress rows: (exercise, date, sets completed, reps completed).
pub const SAMPLE_PROGRESS: &[(&str, &str, i64, i64)] = &[
    ("Squat", "2023-07-01", 3, 10),
    ("Bench Press", "2023-07-02", 3, 8),
    ("Deadlift", "2023-07-03", 4, 6),
];
