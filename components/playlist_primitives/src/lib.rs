//! Shared value types for playlist import: what a track request looks like,
//! how playlists are grouped, and the metadata inherited while walking a
//! document.

mod context;
mod descriptor;
mod plan;

pub use context::Context;
pub use descriptor::TrackDescriptor;
pub use plan::{PlaylistEntry, PlaylistPlan, DEFAULT_PLAYLIST_NAME};
