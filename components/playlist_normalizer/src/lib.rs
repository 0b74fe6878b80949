//! Turns a JSON document of unknown shape into a [`PlaylistPlan`].
//!
//! Three shapes are recognised, tried in order:
//!
//! 1. An explicit playlist object carrying `tracks` and/or `playlist_name`.
//! 2. An `artist -> album -> tracks` mapping, one playlist per album.
//! 3. Anything else, which yields an empty plan.
//!
//! Below the top level, the gatherer walks whatever nesting it
//! finds, turning strings into tracks via [`parse_track_string`] and records
//! into tracks via [`TrackDescriptor::from_record`], while threading the
//! inherited artist and album down as a [`Context`].

mod error;
mod filename;
mod gather;
mod loader;
mod shape;

pub use error::InputError;
pub use filename::parse_track_string;
pub use loader::{load_document, parse_document};
pub use shape::normalize;

pub use playlist_primitives::{Context, PlaylistEntry, PlaylistPlan, TrackDescriptor};

use std::path::Path;

/// Load a document from disk and normalize it in one go
pub fn normalize_file(path: impl AsRef<Path>) -> Result<PlaylistPlan, InputError> {
    let document = load_document(path)?;
    Ok(normalize(&document))
}
