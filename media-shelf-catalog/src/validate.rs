//! Field rules shared by item creation and partial updates.

use std::fmt;

use chrono::Datelike;
use thiserror::Error;

use crate::types::{MediaDetails, MediaKind, MediaPatch, NewMedia};

/// Earliest release year the catalog accepts.
pub const MIN_YEAR: i32 = 1900;

/// The local calendar year, used as the upper bound for `year`.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Names every attribute a media item can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaField {
    Code,
    Title,
    Format,
    Year,
    Price,
    Author,
    Performer,
    Duration,
    Director,
    MainActor,
}

impl MediaField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Code => "code",
            Self::Title => "title",
            Self::Format => "format",
            Self::Year => "year",
            Self::Price => "price",
            Self::Author => "author",
            Self::Performer => "performer",
            Self::Duration => "duration",
            Self::Director => "director",
            Self::MainActor => "main actor",
        }
    }
}

impl fmt::Display for MediaField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a field value was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationReason {
    #[error("must not be empty")]
    Empty,
    #[error("must be between {min} and {max}, got {actual}")]
    YearOutOfRange { min: i32, max: i32, actual: i32 },
    #[error("must not be negative, got {0}")]
    Negative(f64),
    #[error("must be a finite number")]
    NotFinite,
    #[error("must be greater than zero, got {0}")]
    NotPositive(i64),
    #[error("does not apply to {0} items")]
    NotApplicable(MediaKind),
}

/// A single field that violates its rule.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid {field}: {reason}")]
pub struct ValidationError {
    pub field: MediaField,
    pub reason: ValidationReason,
}

impl ValidationError {
    pub fn new(field: MediaField, reason: ValidationReason) -> Self {
        Self { field, reason }
    }
}

// ── Per-field rules ─────────────────────────────────────────────────────────

fn non_empty(field: MediaField, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, ValidationReason::Empty));
    }
    Ok(())
}

fn year_in_range(year: i32, current_year: i32) -> Result<(), ValidationError> {
    if !(MIN_YEAR..=current_year).contains(&year) {
        return Err(ValidationError::new(
            MediaField::Year,
            ValidationReason::YearOutOfRange {
                min: MIN_YEAR,
                max: current_year,
                actual: year,
            },
        ));
    }
    Ok(())
}

fn price_valid(price: f64) -> Result<(), ValidationError> {
    if !price.is_finite() {
        return Err(ValidationError::new(MediaField::Price, ValidationReason::NotFinite));
    }
    if price < 0.0 {
        return Err(ValidationError::new(
            MediaField::Price,
            ValidationReason::Negative(price),
        ));
    }
    Ok(())
}

fn duration_positive(seconds: i64) -> Result<(), ValidationError> {
    if seconds <= 0 {
        return Err(ValidationError::new(
            MediaField::Duration,
            ValidationReason::NotPositive(seconds),
        ));
    }
    Ok(())
}

fn only_for(
    field: MediaField,
    present: bool,
    owner: MediaKind,
    actual: MediaKind,
) -> Result<(), ValidationError> {
    if present && owner != actual {
        return Err(ValidationError::new(
            field,
            ValidationReason::NotApplicable(actual),
        ));
    }
    Ok(())
}

// ── Whole-record checks ─────────────────────────────────────────────────────

/// Validate a creation request, stopping at the first bad field.
pub(crate) fn check_new(new: &NewMedia, current_year: i32) -> Result<(), ValidationError> {
    non_empty(MediaField::Code, &new.code)?;
    non_empty(MediaField::Title, &new.title)?;
    non_empty(MediaField::Format, &new.format)?;
    year_in_range(new.year, current_year)?;
    price_valid(new.price)?;

    match &new.details {
        MediaDetails::Audio(audio) => {
            non_empty(MediaField::Author, &audio.author)?;
            non_empty(MediaField::Performer, &audio.performer)?;
            duration_positive(audio.duration_seconds)?;
        }
        MediaDetails::Video(video) => {
            non_empty(MediaField::Director, &video.director)?;
            non_empty(MediaField::MainActor, &video.main_actor)?;
        }
    }
    Ok(())
}

/// Validate every field present in `patch` for an item of `kind`.
pub(crate) fn check_patch(
    kind: MediaKind,
    patch: &MediaPatch,
    current_year: i32,
) -> Result<(), ValidationError> {
    if let Some(title) = &patch.title {
        non_empty(MediaField::Title, title)?;
    }
    if let Some(format) = &patch.format {
        non_empty(MediaField::Format, format)?;
    }
    if let Some(year) = patch.year {
        year_in_range(year, current_year)?;
    }
    if let Some(price) = patch.price {
        price_valid(price)?;
    }

    only_for(MediaField::Author, patch.author.is_some(), MediaKind::Audio, kind)?;
    only_for(MediaField::Performer, patch.performer.is_some(), MediaKind::Audio, kind)?;
    only_for(MediaField::Duration, patch.duration_seconds.is_some(), MediaKind::Audio, kind)?;
    only_for(MediaField::Director, patch.director.is_some(), MediaKind::Video, kind)?;
    only_for(MediaField::MainActor, patch.main_actor.is_some(), MediaKind::Video, kind)?;

    if let Some(author) = &patch.author {
        non_empty(MediaField::Author, author)?;
    }
    if let Some(performer) = &patch.performer {
        non_empty(MediaField::Performer, performer)?;
    }
    if let Some(duration) = patch.duration_seconds {
        duration_positive(duration)?;
    }
    if let Some(director) = &patch.director {
        non_empty(MediaField::Director, director)?;
    }
    if let Some(main_actor) = &patch.main_actor {
        non_empty(MediaField::MainActor, main_actor)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/validate_tests.rs"]
mod tests;
