use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use media_shelf_lib::{Catalog, MediaItem, MediaKind, SqliteStore};

use super::print_items;
use crate::CliError;

pub(crate) fn run_list(
    catalog: &Catalog<SqliteStore>,
    kind: Option<MediaKind>,
    json: bool,
) -> Result<(), CliError> {
    let items: Vec<&MediaItem> = match kind {
        Some(kind) => catalog.query_by_kind(kind),
        None => catalog.items().iter().collect(),
    };
    print_items(&items, json)
}

pub(crate) fn run_by_price(
    catalog: &Catalog<SqliteStore>,
    kind: MediaKind,
    json: bool,
) -> Result<(), CliError> {
    if !json {
        log::info!(
            "{}",
            format!("{} items by price", kind).if_supports_color(Stdout, |t| t.bold()),
        );
    }
    print_items(&catalog.sorted_by_price(kind), json)
}

pub(crate) fn run_stats(catalog: &Catalog<SqliteStore>, json: bool) -> Result<(), CliError> {
    let stats = catalog.stats();
    if json {
        let value = serde_json::json!({
            "audio": stats.audio,
            "video": stats.video,
            "total": stats.total(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    log::info!(
        "{}",
        "Catalog Statistics".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  Database: {}", catalog.store().path().display());
    crate::log_blank();
    log::info!("  Audio:  {:>6}", stats.audio);
    log::info!("  Video:  {:>6}", stats.video);
    log::info!("  Total:  {:>6}", stats.total());
    Ok(())
}
