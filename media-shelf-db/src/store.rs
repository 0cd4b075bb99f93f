//! Whole-collection load and replace.
//!
//! The catalog is persisted as a mirror of the in-memory working set: it is
//! read once at startup and rewritten in full after every mutation.

use std::path::{Path, PathBuf};

use media_shelf_catalog::{current_year, MediaItem};
use rusqlite::{params, Connection};
use thiserror::Error;

use crate::row::MediaRow;
use crate::schema::{open_database, SchemaError, MEDIA_COLUMNS};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("catalog store at {path} is unavailable: {source}")]
    Unavailable { path: String, source: SchemaError },
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Result of reading the `Media` table.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Items in stored order.
    pub items: Vec<MediaItem>,
    /// Rows that could not be mapped back to an item and were left out.
    pub skipped: usize,
}

/// Read every row of the `Media` table.
///
/// Rows come back in insertion order. A row with an unknown discriminator,
/// a NULL variant column, a column of the wrong type, or a value that breaks
/// the catalog rules is logged and skipped. Failing to prepare or step the
/// query fails the whole load.
pub fn load_all(conn: &Connection) -> Result<LoadReport, StoreError> {
    let mut stmt = conn.prepare(&format!("SELECT {MEDIA_COLUMNS} FROM Media ORDER BY rowid"))?;
    let mut rows = stmt.query([])?;

    let year = current_year();
    let mut report = LoadReport::default();
    while let Some(row) = rows.next()? {
        match MediaRow::decode(row).and_then(|row| row.into_item(year)) {
            Ok(item) => report.items.push(item),
            Err(e) => {
                log::warn!("Skipping stored media record: {}", e);
                report.skipped += 1;
            }
        }
    }
    Ok(report)
}

/// Replace the contents of the `Media` table with `items`.
///
/// The delete and all inserts share one transaction; if any statement fails
/// the table keeps its previous contents.
pub fn replace_all(conn: &mut Connection, items: &[MediaItem]) -> Result<(), StoreError> {
    let tx = conn.transaction()?;
    tx.execute("DELETE FROM Media", [])?;
    {
        let mut stmt = tx.prepare(&format!(
            "INSERT INTO Media ({MEDIA_COLUMNS})
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)"
        ))?;
        for item in items {
            let row = MediaRow::from_item(item);
            stmt.execute(params![
                row.code,
                row.title,
                row.format,
                row.year,
                row.price,
                row.media_type,
                row.author,
                row.performer,
                row.duration,
                row.director,
                row.main_actor,
            ])?;
        }
    }
    tx.commit()?;
    Ok(())
}

// ── Store abstraction ───────────────────────────────────────────────────────

/// A synchronization target for the catalog's working set.
pub trait CatalogStore {
    /// Load every persisted item. An absent store is created empty.
    fn load_all(&self) -> Result<LoadReport, StoreError>;

    /// Discard every persisted item and store `items` instead.
    fn replace_all(&self, items: &[MediaItem]) -> Result<(), StoreError>;
}

/// A catalog stored in a SQLite file.
///
/// Each call opens its own connection and drops it before returning, success
/// or not.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    path: PathBuf,
}

impl SqliteStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> Result<Connection, StoreError> {
        open_database(&self.path).map_err(|source| StoreError::Unavailable {
            path: self.path.display().to_string(),
            source,
        })
    }
}

impl CatalogStore for SqliteStore {
    fn load_all(&self) -> Result<LoadReport, StoreError> {
        let conn = self.connect()?;
        let report = load_all(&conn)?;
        log::debug!(
            "Loaded {} item(s) from {}, skipped {}",
            report.items.len(),
            self.path.display(),
            report.skipped,
        );
        Ok(report)
    }

    fn replace_all(&self, items: &[MediaItem]) -> Result<(), StoreError> {
        let mut conn = self.connect()?;
        replace_all(&mut conn, items)?;
        log::debug!("Saved {} item(s) to {}", items.len(), self.path.display());
        Ok(())
    }
}
