//! SQLite schema creation.

use std::path::Path;

use rusqlite::Connection;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Column list in the order every query and insert uses.
pub const MEDIA_COLUMNS: &str =
    "Code, Title, Format, Year, Price, MediaType, Author, Performer, Duration, Director, MainActor";

/// Create the `Media` table if it doesn't exist.
///
/// Idempotent; safe to call on an existing database.
pub fn create_schema(conn: &Connection) -> Result<(), SchemaError> {
    conn.execute_batch(SCHEMA_SQL)?;
    Ok(())
}

/// Open or create a catalog database at the given path.
///
/// Missing parent directories are created. A fresh file comes back with an
/// empty `Media` table.
pub fn open_database(path: &Path) -> Result<Connection, SchemaError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let conn = Connection::open(path)?;
    conn.execute_batch("PRAGMA journal_mode=WAL;")?;
    create_schema(&conn)?;
    Ok(conn)
}

/// Open an in-memory database with the full schema. Useful for testing.
pub fn open_memory() -> Result<Connection, SchemaError> {
    let conn = Connection::open_in_memory()?;
    create_schema(&conn)?;
    Ok(conn)
}

// Variant columns are nullable; which ones are filled depends on MediaType.
const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS Media (
    Code TEXT NOT NULL PRIMARY KEY,
    Title TEXT NOT NULL,
    Format TEXT NOT NULL,
    Year INTEGER NOT NULL,
    Price REAL NOT NULL,
    MediaType TEXT NOT NULL,
    Author TEXT,
    Performer TEXT,
    Duration INTEGER,
    Director TEXT,
    MainActor TEXT
);
"#;
