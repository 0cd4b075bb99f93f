use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use media_shelf_lib::settings;

use crate::CliError;

/// Show the settings file and the database path that would be used.
pub(crate) fn run_config_show(db: Option<PathBuf>) {
    let path = settings::settings_path();

    log::info!(
        "{}",
        "Media Shelf Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("");

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    let source = if db.is_some() {
        "(--db)"
    } else if settings::load_database_path(&path).is_some() {
        "(settings file)"
    } else {
        "(default)"
    };
    log::info!(
        "  Database:      {} {}",
        settings::resolve_database_path(db)
            .display()
            .if_supports_color(Stdout, |t| t.cyan()),
        source.if_supports_color(Stdout, |t| t.dimmed()),
    );

    if let Some(contents) = settings::load_settings_string() {
        log::info!("");
        for line in contents.lines() {
            log::info!("  {}", line);
        }
    }
}

/// Print the settings file path.
pub(crate) fn run_config_path() {
    log::info!("{}", settings::settings_path().display());
}

/// Store (or clear) the database path in the settings file.
pub(crate) fn run_config_set_db(path: Option<PathBuf>) -> Result<(), CliError> {
    let settings_file = settings::settings_path();
    let path = match path {
        Some(p) if p.is_relative() => Some(std::env::current_dir()?.join(p)),
        other => other,
    };

    settings::save_database_path(&settings_file, path.as_deref()).map_err(|e| {
        CliError::config(format!(
            "Failed to write {}: {}",
            settings_file.display(),
            e
        ))
    })?;

    match path {
        Some(p) => log::info!(
            "Database path set to {}",
            p.display().if_supports_color(Stdout, |t| t.cyan())
        ),
        None => log::info!("Database path cleared; the default location will be used."),
    }
    Ok(())
}
