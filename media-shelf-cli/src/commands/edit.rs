use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use media_shelf_lib::{
    AudioDetails, Catalog, MediaDetails, MediaPatch, NewMedia, SqliteStore, VideoDetails,
};

use super::report_sync;
use crate::cli_types::CommonFields;
use crate::CliError;

fn new_media(common: CommonFields, details: MediaDetails) -> NewMedia {
    NewMedia {
        code: common.code,
        title: common.title,
        format: common.format,
        year: common.year,
        price: common.price,
        details,
    }
}

fn add(catalog: &mut Catalog<SqliteStore>, new: NewMedia) -> Result<(), CliError> {
    let code = new.code.clone();
    let kind = new.details.kind();
    let sync = catalog.create(new)?;
    log::info!(
        "Added {} item {}",
        kind,
        code.if_supports_color(Stdout, |t| t.bold()),
    );
    report_sync(&sync);
    Ok(())
}

pub(crate) fn run_add_audio(
    catalog: &mut Catalog<SqliteStore>,
    common: CommonFields,
    author: String,
    performer: String,
    duration: i64,
) -> Result<(), CliError> {
    let details = MediaDetails::Audio(AudioDetails {
        author,
        performer,
        duration_seconds: duration,
    });
    add(catalog, new_media(common, details))
}

pub(crate) fn run_add_video(
    catalog: &mut Catalog<SqliteStore>,
    common: CommonFields,
    director: String,
    main_actor: String,
) -> Result<(), CliError> {
    let details = MediaDetails::Video(VideoDetails {
        director,
        main_actor,
    });
    add(catalog, new_media(common, details))
}

pub(crate) fn run_remove(catalog: &mut Catalog<SqliteStore>, code: &str) -> Result<(), CliError> {
    let removal = catalog.remove(code);
    if removal.count == 0 {
        log::warn!("No item with code '{}' found.", code);
        return Ok(());
    }

    log::info!("Removed {}", code.if_supports_color(Stdout, |t| t.bold()));
    if let Some(sync) = &removal.sync {
        report_sync(sync);
    }
    Ok(())
}

pub(crate) fn run_edit(
    catalog: &mut Catalog<SqliteStore>,
    code: &str,
    patch: MediaPatch,
) -> Result<(), CliError> {
    if patch.is_empty() {
        log::info!("Nothing to change.");
        return Ok(());
    }

    let sync = catalog.update(code, &patch)?;
    log::info!("Updated {}", code.if_supports_color(Stdout, |t| t.bold()));
    if let Some(item) = catalog.get(code) {
        log::info!("  {}", item.describe());
    }
    report_sync(&sync);
    Ok(())
}
