//! Application settings (database location, config file location).
//!
//! The settings file is `~/.config/media-shelf/settings.toml`:
//!
//! ```toml
//! [database]
//! path = "/home/me/media.db"
//! ```

use std::io;
use std::path::{Path, PathBuf};

/// File name used for the catalog database when nothing else is configured.
pub const DEFAULT_DB_FILE: &str = "media.db";

/// Canonical path to the settings file: `~/.config/media-shelf/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("media-shelf").join("settings.toml")
}

/// Default database location: `<data dir>/media-shelf/media.db`, or
/// `./media.db` when the platform has no data directory.
pub fn default_database_path() -> PathBuf {
    match dirs::data_dir() {
        Some(data) => data.join("media-shelf").join(DEFAULT_DB_FILE),
        None => PathBuf::from(DEFAULT_DB_FILE),
    }
}

/// Resolve the database path using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. Saved `database.path` in `settings.toml`
/// 3. [`default_database_path`]
pub fn resolve_database_path(cli_override: Option<PathBuf>) -> PathBuf {
    if let Some(p) = cli_override {
        return p;
    }
    if let Some(p) = load_database_path(&settings_path()) {
        return p;
    }
    default_database_path()
}

/// Read `database.path` from the given settings file, if set.
pub fn load_database_path(settings: &Path) -> Option<PathBuf> {
    let contents = std::fs::read_to_string(settings).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    let path = doc.get("database")?.get("path")?.as_str()?;
    if path.is_empty() {
        None
    } else {
        Some(PathBuf::from(path))
    }
}

/// Set `database.path` in the settings file, or remove it when `path` is
/// `None`. Other keys in the file are kept; an unreadable file starts over.
pub fn save_database_path(settings: &Path, path: Option<&Path>) -> io::Result<()> {
    let mut doc = read_table(settings);

    let database = match doc
        .entry("database")
        .or_insert_with(|| toml::Value::Table(toml::Table::new()))
    {
        toml::Value::Table(table) => table,
        _ => return Err(io::Error::other("`database` in settings.toml is not a table")),
    };
    match path {
        Some(p) => {
            database.insert(
                "path".to_string(),
                toml::Value::String(p.to_string_lossy().into_owned()),
            );
        }
        None => {
            database.remove("path");
        }
    }

    let text = toml::to_string_pretty(&doc).map_err(io::Error::other)?;
    replace_file(settings, &text)
}

fn read_table(settings: &Path) -> toml::Table {
    std::fs::read_to_string(settings)
        .ok()
        .and_then(|contents| toml::from_str(&contents).ok())
        .unwrap_or_default()
}

/// Write `contents` beside `target`, then rename it into place.
fn replace_file(target: &Path, contents: &str) -> io::Result<()> {
    if let Some(parent) = target.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let staged = target.with_extension("toml.tmp");
    std::fs::write(&staged, contents)?;
    std::fs::rename(&staged, target)
}

/// Load the full settings file as a pretty-printed TOML string for display.
pub fn load_settings_string() -> Option<String> {
    let contents = std::fs::read_to_string(settings_path()).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    toml::to_string_pretty(&doc).ok()
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
