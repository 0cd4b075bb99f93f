//! SQLite persistence layer for the media catalog.
//!
//! All items live in one `Media` table with a `MediaType` discriminator
//! column (table-per-hierarchy). The store is only ever loaded whole and
//! replaced whole; there are no per-row writes.

pub mod row;
pub mod schema;
pub mod store;

pub use row::{MediaRow, RowError};
pub use schema::{open_database, open_memory, SchemaError};
pub use store::{load_all, replace_all, CatalogStore, LoadReport, SqliteStore, StoreError};
