//! Case-insensitive substring search over the working set.

use std::fmt;

use media_shelf_catalog::{MediaDetails, MediaItem, MediaKind};

/// Which kinds of item a search considers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantFilter {
    Audio,
    Video,
    All,
}

impl VariantFilter {
    pub fn admits(&self, kind: MediaKind) -> bool {
        match self {
            Self::Audio => kind == MediaKind::Audio,
            Self::Video => kind == MediaKind::Video,
            Self::All => true,
        }
    }
}

impl From<MediaKind> for VariantFilter {
    fn from(kind: MediaKind) -> Self {
        match kind {
            MediaKind::Audio => Self::Audio,
            MediaKind::Video => Self::Video,
        }
    }
}

impl fmt::Display for VariantFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Audio => f.write_str("Audio"),
            Self::Video => f.write_str("Video"),
            Self::All => f.write_str("all"),
        }
    }
}

/// Which field(s) the search text is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    /// `title`, on any kind.
    Title,
    /// `performer`; audio items only.
    Performer,
    /// `director`; video items only.
    Director,
    /// Title, author and performer for audio; title, director and main actor
    /// for video.
    Unfiltered,
}

impl SearchField {
    /// The only kind this field exists on, if it is kind-specific.
    pub fn owner(&self) -> Option<MediaKind> {
        match self {
            Self::Performer => Some(MediaKind::Audio),
            Self::Director => Some(MediaKind::Video),
            Self::Title | Self::Unfiltered => None,
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Title => f.write_str("title"),
            Self::Performer => f.write_str("performer"),
            Self::Director => f.write_str("director"),
            Self::Unfiltered => f.write_str("any field"),
        }
    }
}

/// Matches of a [`search`], in catalog order.
#[derive(Debug)]
pub struct SearchResults<'a> {
    pub items: Vec<&'a MediaItem>,
    /// Set when the field only exists on a kind the filter excludes. The text
    /// was not applied and `items` holds every candidate.
    pub ignored_field: Option<SearchField>,
}

/// Filter `items` by kind, then by `text` in the selected field.
///
/// Empty `text` returns the kind-filtered candidates unchanged; any other
/// text, whitespace included, is matched as given. A kind-specific field
/// under [`VariantFilter::All`] silently drops items of the other kind.
/// Under the opposite single-kind filter the field is ignored.
pub fn search<'a>(
    items: &'a [MediaItem],
    filter: VariantFilter,
    field: SearchField,
    text: &str,
) -> SearchResults<'a> {
    let candidates = items.iter().filter(|item| filter.admits(item.kind()));

    if text.is_empty() {
        return SearchResults {
            items: candidates.collect(),
            ignored_field: None,
        };
    }

    if let Some(owner) = field.owner()
        && !filter.admits(owner)
    {
        return SearchResults {
            items: candidates.collect(),
            ignored_field: Some(field),
        };
    }

    let needle = text.to_lowercase();
    SearchResults {
        items: candidates
            .filter(|item| matches(item, field, &needle))
            .collect(),
        ignored_field: None,
    }
}

fn contains(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

fn matches(item: &MediaItem, field: SearchField, needle: &str) -> bool {
    match (field, item.details()) {
        (SearchField::Title, _) => contains(item.title(), needle),
        (SearchField::Performer, MediaDetails::Audio(audio)) => contains(&audio.performer, needle),
        (SearchField::Director, MediaDetails::Video(video)) => contains(&video.director, needle),
        (SearchField::Performer, MediaDetails::Video(_))
        | (SearchField::Director, MediaDetails::Audio(_)) => false,
        (SearchField::Unfiltered, MediaDetails::Audio(audio)) => {
            contains(item.title(), needle)
                || contains(&audio.author, needle)
                || contains(&audio.performer, needle)
        }
        (SearchField::Unfiltered, MediaDetails::Video(video)) => {
            contains(item.title(), needle)
                || contains(&video.director, needle)
                || contains(&video.main_actor, needle)
        }
    }
}

#[cfg(test)]
#[path = "tests/search_tests.rs"]
mod tests;
