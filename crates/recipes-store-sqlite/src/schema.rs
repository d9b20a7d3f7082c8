//! SQL schema for the recipes SQLite store.
//!
//! Executed only when the database file is created; an existing file is
//! opened as-is.

/// Default schema script.
pub const SCHEMA: &str = "
-- AUTOINCREMENT keeps ids of deleted rows from being handed out again.
CREATE TABLE IF NOT EXISTS recipes (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    title       TEXT    NOT NULL,
    making_time TEXT    NOT NULL,
    serves      TEXT    NOT NULL,
    ingredients TEXT    NOT NULL,
    cost        INTEGER NOT NULL,  -- integer affinity; free text is kept as text
    created_at  TEXT    NOT NULL,  -- datetime('now'), UTC
    updated_at  TEXT    NOT NULL
);
";

/// Column list shared by every read so rows decode positionally.
pub const SELECT_RECIPE: &str = "SELECT id, title, making_time, serves, ingredients, cost, \
                                 created_at, updated_at FROM recipes";
