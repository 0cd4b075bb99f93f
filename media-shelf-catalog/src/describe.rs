//! Human-readable rendering of catalog entries.
//!
//! Display only; nothing parses this text back.

use std::fmt;

use crate::types::{MediaDetails, MediaItem};

/// Render a duration in seconds as `M min S sec`.
pub fn format_duration(seconds: i64) -> String {
    format!("{} min {} sec", seconds / 60, seconds % 60)
}

impl MediaItem {
    /// Common fields first, then the variant fields in declaration order.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for MediaItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Code: {}, Title: {}, Format: {}, Year: {}, Price: {:.2}",
            self.code(),
            self.title(),
            self.format(),
            self.year(),
            self.price(),
        )?;
        match self.details() {
            MediaDetails::Audio(audio) => write!(
                f,
                ", Author: {}, Performer: {}, Duration: {}",
                audio.author,
                audio.performer,
                format_duration(audio.duration_seconds),
            ),
            MediaDetails::Video(video) => write!(
                f,
                ", Director: {}, Main actor: {}",
                video.director, video.main_actor,
            ),
        }
    }
}

#[cfg(test)]
#[path = "tests/describe_tests.rs"]
mod tests;
