pub(crate) mod config;
pub(crate) mod edit;
pub(crate) mod list;
pub(crate) mod search;

use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use media_shelf_lib::settings::resolve_database_path;
use media_shelf_lib::{Catalog, MediaItem, SqliteStore, SyncStatus};

use crate::CliError;

/// Open the catalog and load it.
///
/// A store that cannot be read is reported and the command carries on with
/// an empty catalog.
pub(crate) fn open_catalog(db: Option<PathBuf>) -> Catalog<SqliteStore> {
    let path = resolve_database_path(db);
    log::debug!("Using catalog database {}", path.display());

    let mut catalog = Catalog::new(SqliteStore::new(path));
    match catalog.initialize() {
        Ok(summary) => {
            log::debug!(
                "Loaded {} audio and {} video item(s)",
                summary.stats.audio,
                summary.stats.video
            );
            if summary.skipped > 0 {
                log::warn!(
                    "{} stored record(s) could not be read and are not in the catalog.",
                    summary.skipped
                );
                log::warn!("The next change will remove them from the database.");
            }
        }
        Err(e) => {
            log::warn!("Could not load the catalog: {}", e);
            log::warn!("Continuing with an empty catalog.");
        }
    }
    catalog
}

/// Warn when a change was kept in memory but not saved.
pub(crate) fn report_sync(sync: &SyncStatus) {
    if let Some(e) = sync.warning() {
        log::warn!("The change was not saved: {}", e);
        log::warn!("The database no longer matches this session.");
    }
}

/// Print items, one per line, each followed by its discounted price.
pub(crate) fn print_items(items: &[&MediaItem], json: bool) -> Result<(), CliError> {
    if json {
        println!("{}", serde_json::to_string_pretty(items)?);
        return Ok(());
    }

    if items.is_empty() {
        log::info!("No items found.");
        return Ok(());
    }

    for item in items {
        log::info!(
            "{} {}, Discounted price: {}",
            format!("[{}]", item.kind()).if_supports_color(Stdout, |t| t.cyan()),
            item.describe(),
            format!("{:.2}", item.discounted_price()).if_supports_color(Stdout, |t| t.green()),
        );
    }
    Ok(())
}
