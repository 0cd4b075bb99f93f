use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use media_shelf_lib::{Catalog, SearchField, SqliteStore, VariantFilter};

use super::print_items;
use crate::CliError;

pub(crate) fn run_search(
    catalog: &Catalog<SqliteStore>,
    filter: VariantFilter,
    field: SearchField,
    text: &str,
    json: bool,
) -> Result<(), CliError> {
    let found = catalog.search(filter, field, text);
    if let Some(ignored) = found.ignored_field {
        log::warn!(
            "Search by {} only applies to {} items; showing every {} item.",
            ignored,
            ignored.owner().map_or("other", |kind| kind.as_str()),
            filter,
        );
    }

    if !json {
        log::info!(
            "{} ({} match{})",
            "Search results".if_supports_color(Stdout, |t| t.bold()),
            found.items.len(),
            if found.items.len() == 1 { "" } else { "es" },
        );
    }
    print_items(&found.items, json)
}
