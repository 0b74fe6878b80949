use crate::service::PlaylistId;
use thiserror::Error;

/// Failure reported by a service backend
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("request rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },

    #[error("protocol error: {0}")]
    Protocol(String),
}

/// A service failure together with the publishing step it broke.
///
/// Any of these ends work on the playlist at hand; other playlists in the
/// plan are still attempted.
#[derive(Error, Debug)]
pub enum PublishError {
    #[error("failed to create playlist '{name}'")]
    Create {
        name: String,
        #[source]
        source: ServiceError,
    },

    #[error("catalog search failed for '{query}'")]
    Search {
        query: String,
        #[source]
        source: ServiceError,
    },

    #[error("failed to add batch {batch} to playlist {playlist_id}")]
    Append {
        playlist_id: PlaylistId,
        batch: usize,
        #[source]
        source: ServiceError,
    },
}
