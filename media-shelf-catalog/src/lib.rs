//! Media catalog data model: entities, validation, pricing and display.
//!
//! This crate defines the audio/video entity model without any storage
//! dependencies. `media-shelf-db` maps these types to and from SQLite and
//! `media-shelf-lib` keeps the in-memory working set.

pub mod describe;
pub mod types;
pub mod validate;

pub use types::*;
pub use validate::{current_year, MediaField, ValidationError, ValidationReason, MIN_YEAR};
