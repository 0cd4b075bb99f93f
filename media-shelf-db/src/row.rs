//! Flat row representation of a catalog item.
//!
//! A [`MediaRow`] mirrors the `Media` table one-to-one: the common columns
//! plus every variant column as an `Option`. Converting back into a
//! [`MediaItem`] picks the variant from `media_type` and requires that
//! variant's columns to be present.

use media_shelf_catalog::{
    AudioDetails, MediaDetails, MediaItem, MediaKind, NewMedia, UnknownKind, ValidationError,
    VideoDetails,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RowError {
    #[error("row '{code}': {source}")]
    UnknownKind { code: String, source: UnknownKind },
    #[error("row '{code}': {kind} record has NULL in column {column}")]
    MissingColumn {
        code: String,
        kind: MediaKind,
        column: &'static str,
    },
    #[error("row '{code}': {source}")]
    Invalid {
        code: String,
        source: ValidationError,
    },
    #[error("row '{code}': {source}")]
    Decode {
        code: String,
        source: rusqlite::Error,
    },
}

/// One record of the `Media` table.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaRow {
    pub code: String,
    pub title: String,
    pub format: String,
    pub year: i32,
    pub price: f64,
    pub media_type: String,
    pub author: Option<String>,
    pub performer: Option<String>,
    pub duration: Option<i64>,
    pub director: Option<String>,
    pub main_actor: Option<String>,
}

impl MediaRow {
    /// Flatten an item, leaving the other variant's columns NULL.
    pub fn from_item(item: &MediaItem) -> Self {
        let mut row = Self {
            code: item.code().to_string(),
            title: item.title().to_string(),
            format: item.format().to_string(),
            year: item.year(),
            price: item.price(),
            media_type: item.kind().as_str().to_string(),
            author: None,
            performer: None,
            duration: None,
            director: None,
            main_actor: None,
        };
        match item.details() {
            MediaDetails::Audio(audio) => {
                row.author = Some(audio.author.clone());
                row.performer = Some(audio.performer.clone());
                row.duration = Some(audio.duration_seconds);
            }
            MediaDetails::Video(video) => {
                row.director = Some(video.director.clone());
                row.main_actor = Some(video.main_actor.clone());
            }
        }
        row
    }

    /// Rebuild the item, re-checking it against the catalog rules.
    ///
    /// Columns belonging to the other variant are ignored.
    pub fn into_item(self, current_year: i32) -> Result<MediaItem, RowError> {
        let kind: MediaKind = self.media_type.parse().map_err(|e| RowError::UnknownKind {
            code: self.code.clone(),
            source: e,
        })?;

        let details = match kind {
            MediaKind::Audio => MediaDetails::Audio(AudioDetails {
                author: required(&self.code, kind, "Author", self.author)?,
                performer: required(&self.code, kind, "Performer", self.performer)?,
                duration_seconds: required(&self.code, kind, "Duration", self.duration)?,
            }),
            MediaKind::Video => MediaDetails::Video(VideoDetails {
                director: required(&self.code, kind, "Director", self.director)?,
                main_actor: required(&self.code, kind, "MainActor", self.main_actor)?,
            }),
        };

        let code = self.code;
        let new = NewMedia {
            code: code.clone(),
            title: self.title,
            format: self.format,
            year: self.year,
            price: self.price,
            details,
        };
        MediaItem::create(new, current_year).map_err(|source| RowError::Invalid { code, source })
    }

    /// Like [`MediaRow::from_sql`], but a column holding the wrong type is a
    /// [`RowError`] for this row alone.
    pub(crate) fn decode(row: &rusqlite::Row<'_>) -> Result<Self, RowError> {
        Self::from_sql(row).map_err(|source| RowError::Decode {
            code: row
                .get_ref(0)
                .ok()
                .and_then(|value| value.as_str().ok())
                .unwrap_or("?")
                .to_string(),
            source,
        })
    }

    /// Read a row selected with [`crate::schema::MEDIA_COLUMNS`].
    pub(crate) fn from_sql(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            code: row.get(0)?,
            title: row.get(1)?,
            format: row.get(2)?,
            year: row.get(3)?,
            price: row.get(4)?,
            media_type: row.get(5)?,
            author: row.get(6)?,
            performer: row.get(7)?,
            duration: row.get(8)?,
            director: row.get(9)?,
            main_actor: row.get(10)?,
        })
    }
}

fn required<T>(
    code: &str,
    kind: MediaKind,
    column: &'static str,
    value: Option<T>,
) -> Result<T, RowError> {
    value.ok_or_else(|| RowError::MissingColumn {
        code: code.to_string(),
        kind,
        column,
    })
}

#[cfg(test)]
#[path = "tests/row_tests.rs"]
mod tests;
