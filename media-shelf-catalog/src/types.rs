//! Data model types for the media catalog.
//!
//! Every record shares the common attributes held by [`MediaItem`]; the
//! variant-specific fields live in a [`MediaDetails`] payload, so the kind tag
//! of an item can never disagree with the data it carries.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::validate::{self, ValidationError};

// ── Kind ────────────────────────────────────────────────────────────────────

/// The concrete kind of a media item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaKind {
    Audio,
    Video,
}

/// Discount multiplier for audio records (10% off).
pub const AUDIO_DISCOUNT: f64 = 0.90;

/// Discount multiplier for video records (15% off).
pub const VIDEO_DISCOUNT: f64 = 0.85;

impl MediaKind {
    pub const ALL: [MediaKind; 2] = [MediaKind::Audio, MediaKind::Video];

    /// Discriminator value stored in the `MediaType` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Audio => "Audio",
            Self::Video => "Video",
        }
    }

    /// Price multiplier for this kind, or `None` when the kind has no
    /// discount policy and sells at list price.
    pub fn discount_factor(&self) -> Option<f64> {
        match self {
            Self::Audio => Some(AUDIO_DISCOUNT),
            Self::Video => Some(VIDEO_DISCOUNT),
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A discriminator string that is neither `"Audio"` nor `"Video"`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown media type '{0}'")]
pub struct UnknownKind(pub String);

impl FromStr for MediaKind {
    type Err = UnknownKind;

    /// Strict parse of a persisted discriminator. Matching is exact.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Audio" => Ok(Self::Audio),
            "Video" => Ok(Self::Video),
            other => Err(UnknownKind(other.to_string())),
        }
    }
}

// ── Variant payloads ────────────────────────────────────────────────────────

/// Fields only audio records carry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioDetails {
    /// Composer or writer of the recording.
    pub author: String,
    /// Singer or band.
    pub performer: String,
    pub duration_seconds: i64,
}

/// Fields only video records carry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoDetails {
    pub director: String,
    pub main_actor: String,
}

/// Variant-specific payload of a [`MediaItem`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum MediaDetails {
    Audio(AudioDetails),
    Video(VideoDetails),
}

impl MediaDetails {
    pub fn kind(&self) -> MediaKind {
        match self {
            Self::Audio(_) => MediaKind::Audio,
            Self::Video(_) => MediaKind::Video,
        }
    }
}

// ── Media item ──────────────────────────────────────────────────────────────

/// Unvalidated input for [`MediaItem::create`].
///
/// Values arrive already parsed into primitives; checking them against the
/// catalog rules is the job of `create`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewMedia {
    pub code: String,
    pub title: String,
    pub format: String,
    pub year: i32,
    pub price: f64,
    #[serde(flatten)]
    pub details: MediaDetails,
}

/// A single catalog entry.
///
/// Fields are private: an item is built through [`MediaItem::create`] and
/// changed only through [`MediaItem::apply`], both of which validate. The
/// `code` never changes after creation. Deserializing goes through
/// [`NewMedia`] and the same checks, against the calendar year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "NewMedia")]
pub struct MediaItem {
    code: String,
    title: String,
    format: String,
    year: i32,
    price: f64,
    #[serde(flatten)]
    details: MediaDetails,
}

impl TryFrom<NewMedia> for MediaItem {
    type Error = ValidationError;

    fn try_from(new: NewMedia) -> Result<Self, Self::Error> {
        Self::create(new, validate::current_year())
    }
}

impl MediaItem {
    /// Validate `new` and build an item from it.
    ///
    /// Checks run in a fixed order (code, title, format, year, price, then the
    /// variant fields) and stop at the first failure.
    pub fn create(new: NewMedia, current_year: i32) -> Result<Self, ValidationError> {
        validate::check_new(&new, current_year)?;
        Ok(Self {
            code: new.code,
            title: new.title,
            format: new.format,
            year: new.year,
            price: new.price,
            details: new.details,
        })
    }

    /// Apply a partial update. Every present field is validated before any is
    /// written, so a failure leaves the item untouched.
    pub fn apply(&mut self, patch: &MediaPatch, current_year: i32) -> Result<(), ValidationError> {
        validate::check_patch(self.kind(), patch, current_year)?;

        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(format) = &patch.format {
            self.format = format.clone();
        }
        if let Some(year) = patch.year {
            self.year = year;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        match &mut self.details {
            MediaDetails::Audio(audio) => {
                if let Some(author) = &patch.author {
                    audio.author = author.clone();
                }
                if let Some(performer) = &patch.performer {
                    audio.performer = performer.clone();
                }
                if let Some(duration) = patch.duration_seconds {
                    audio.duration_seconds = duration;
                }
            }
            MediaDetails::Video(video) => {
                if let Some(director) = &patch.director {
                    video.director = director.clone();
                }
                if let Some(main_actor) = &patch.main_actor {
                    video.main_actor = main_actor.clone();
                }
            }
        }
        Ok(())
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn format(&self) -> &str {
        &self.format
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn details(&self) -> &MediaDetails {
        &self.details
    }

    pub fn kind(&self) -> MediaKind {
        self.details.kind()
    }

    pub fn is_kind(&self, kind: MediaKind) -> bool {
        self.kind() == kind
    }

    pub fn as_audio(&self) -> Option<&AudioDetails> {
        match &self.details {
            MediaDetails::Audio(audio) => Some(audio),
            MediaDetails::Video(_) => None,
        }
    }

    pub fn as_video(&self) -> Option<&VideoDetails> {
        match &self.details {
            MediaDetails::Video(video) => Some(video),
            MediaDetails::Audio(_) => None,
        }
    }

    /// Price after the kind's discount policy. Kinds without a policy sell at
    /// list price.
    pub fn discounted_price(&self) -> f64 {
        match self.kind().discount_factor() {
            Some(factor) => self.price * factor,
            None => self.price,
        }
    }
}

// ── Partial update ──────────────────────────────────────────────────────────

/// A partial update: only the fields that are `Some` are changed.
///
/// `code` is deliberately absent; it is the item's identity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MediaPatch {
    pub title: Option<String>,
    pub format: Option<String>,
    pub year: Option<i32>,
    pub price: Option<f64>,
    pub author: Option<String>,
    pub performer: Option<String>,
    pub duration_seconds: Option<i64>,
    pub director: Option<String>,
    pub main_actor: Option<String>,
}

impl MediaPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn performer(mut self, performer: impl Into<String>) -> Self {
        self.performer = Some(performer.into());
        self
    }

    pub fn duration_seconds(mut self, duration: i64) -> Self {
        self.duration_seconds = Some(duration);
        self
    }

    pub fn director(mut self, director: impl Into<String>) -> Self {
        self.director = Some(director.into());
        self
    }

    pub fn main_actor(mut self, main_actor: impl Into<String>) -> Self {
        self.main_actor = Some(main_actor.into());
        self
    }

    /// True when the patch names no field at all.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
