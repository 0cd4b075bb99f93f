//! The catalog working set and its synchronization with the store.

use media_shelf_catalog::{current_year, MediaItem, MediaKind, MediaPatch, NewMedia};
use media_shelf_db::{CatalogStore, StoreError};

use crate::error::CatalogError;
use crate::search::{self, SearchField, SearchResults, VariantFilter};

/// Outcome of the save that follows a mutation.
///
/// A failed save does not undo the in-memory change; the caller should warn
/// that memory and store have diverged.
#[derive(Debug)]
pub enum SyncStatus {
    Synced,
    Diverged(StoreError),
}

impl SyncStatus {
    pub fn is_synced(&self) -> bool {
        matches!(self, Self::Synced)
    }

    pub fn warning(&self) -> Option<&StoreError> {
        match self {
            Self::Synced => None,
            Self::Diverged(e) => Some(e),
        }
    }
}

/// Result of [`Catalog::remove`].
#[derive(Debug)]
pub struct Removal {
    /// Items removed; zero means the code was not found.
    pub count: usize,
    /// Save outcome, or `None` when nothing was removed and no save ran.
    pub sync: Option<SyncStatus>,
}

/// Item counts per kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogStats {
    pub audio: usize,
    pub video: usize,
}

impl CatalogStats {
    pub fn total(&self) -> usize {
        self.audio + self.video
    }
}

/// What [`Catalog::initialize`] found in the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub stats: CatalogStats,
    /// Stored records that could not be read. The next save drops them.
    pub skipped: usize,
}

/// The in-memory media catalog, mirrored to a [`CatalogStore`].
///
/// Items keep insertion order and are unique by code.
pub struct Catalog<S> {
    store: S,
    items: Vec<MediaItem>,
    pinned_year: Option<i32>,
}

impl<S: CatalogStore> Catalog<S> {
    /// An empty catalog. Call [`Catalog::initialize`] to load the store.
    pub fn new(store: S) -> Self {
        Self {
            store,
            items: Vec::new(),
            pinned_year: None,
        }
    }

    /// Validate years against `year` instead of the calendar.
    pub fn with_current_year(mut self, year: i32) -> Self {
        self.pinned_year = Some(year);
        self
    }

    pub fn current_year(&self) -> i32 {
        self.pinned_year.unwrap_or_else(current_year)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Replace the working set with the store's contents.
    ///
    /// On failure the catalog is left empty and the error is returned, so
    /// the caller can carry on with an empty catalog.
    pub fn initialize(&mut self) -> Result<LoadSummary, StoreError> {
        match self.store.load_all() {
            Ok(report) => {
                self.items = report.items;
                let summary = LoadSummary {
                    stats: self.stats(),
                    skipped: report.skipped,
                };
                log::debug!(
                    "Catalog loaded: {} audio, {} video, {} unreadable",
                    summary.stats.audio,
                    summary.stats.video,
                    summary.skipped
                );
                Ok(summary)
            }
            Err(e) => {
                self.items.clear();
                Err(e)
            }
        }
    }

    // ── Mutations ───────────────────────────────────────────────────────────

    /// Append `item` and save. Fails without change if the code is taken.
    pub fn add(&mut self, item: MediaItem) -> Result<SyncStatus, CatalogError> {
        if self.contains(item.code()) {
            return Err(CatalogError::duplicate_code(item.code()));
        }
        self.items.push(item);
        Ok(self.sync())
    }

    /// Validate `new` against the current year, then [`Catalog::add`] it.
    pub fn create(&mut self, new: NewMedia) -> Result<SyncStatus, CatalogError> {
        let item = MediaItem::create(new, self.current_year())?;
        self.add(item)
    }

    /// Remove every item with `code`. Saves only if something was removed.
    pub fn remove(&mut self, code: &str) -> Removal {
        let before = self.items.len();
        self.items.retain(|item| item.code() != code);
        let count = before - self.items.len();

        let sync = (count > 0).then(|| self.sync());
        Removal { count, sync }
    }

    /// Apply the fields present in `patch` to the item with `code`.
    ///
    /// All-or-nothing: if any field is invalid, no field changes and nothing
    /// is saved.
    pub fn update(&mut self, code: &str, patch: &MediaPatch) -> Result<SyncStatus, CatalogError> {
        let year = self.current_year();
        let item = self
            .items
            .iter_mut()
            .find(|item| item.code() == code)
            .ok_or_else(|| CatalogError::not_found(code))?;
        item.apply(patch, year)?;
        Ok(self.sync())
    }

    /// Save the working set as it is now.
    pub fn flush(&self) -> Result<(), StoreError> {
        self.store.replace_all(&self.items)
    }

    fn sync(&self) -> SyncStatus {
        match self.flush() {
            Ok(()) => SyncStatus::Synced,
            Err(e) => {
                log::debug!("Save after mutation failed: {}", e);
                SyncStatus::Diverged(e)
            }
        }
    }

    // ── Queries ─────────────────────────────────────────────────────────────

    /// Every item, in insertion order.
    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, code: &str) -> Option<&MediaItem> {
        self.items.iter().find(|item| item.code() == code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    /// Items of `kind`, in catalog order.
    pub fn query_by_kind(&self, kind: MediaKind) -> Vec<&MediaItem> {
        self.items.iter().filter(|item| item.is_kind(kind)).collect()
    }

    /// Items of `kind` by ascending price; equal prices keep catalog order.
    pub fn sorted_by_price(&self, kind: MediaKind) -> Vec<&MediaItem> {
        let mut items = self.query_by_kind(kind);
        items.sort_by(|a, b| a.price().total_cmp(&b.price()));
        items
    }

    /// See [`search::search`].
    pub fn search(
        &self,
        filter: VariantFilter,
        field: SearchField,
        text: &str,
    ) -> SearchResults<'_> {
        search::search(&self.items, filter, field, text)
    }

    pub fn stats(&self) -> CatalogStats {
        self.items
            .iter()
            .fold(CatalogStats::default(), |mut stats, item| {
                match item.kind() {
                    MediaKind::Audio => stats.audio += 1,
                    MediaKind::Video => stats.video += 1,
                }
                stats
            })
    }
}
