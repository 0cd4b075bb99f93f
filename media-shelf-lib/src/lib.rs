//! The media catalog repository.
//!
//! [`Catalog`] owns the authoritative in-memory working set and keeps a
//! [`CatalogStore`] in sync with it: the store is read once by
//! [`Catalog::initialize`] and rewritten in full after every successful
//! mutation. Queries never touch the store.

pub mod error;
pub mod repository;
pub mod search;
pub mod settings;

pub use error::CatalogError;
pub use repository::{Catalog, CatalogStats, LoadSummary, Removal, SyncStatus};
pub use search::{SearchField, SearchResults, VariantFilter};

pub use media_shelf_catalog::{
    AudioDetails, MediaDetails, MediaField, MediaItem, MediaKind, MediaPatch, NewMedia,
    ValidationError, VideoDetails,
};
pub use media_shelf_db::{CatalogStore, LoadReport, SqliteStore, StoreError};
