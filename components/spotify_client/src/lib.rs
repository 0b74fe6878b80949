//! Spotify Web API backend for the playlist publisher.
//!
//! Authentication is not handled here: callers pass an OAuth access token
//! carrying the `playlist-modify-private` (and, for public playlists,
//! `playlist-modify-public`) scope.

mod client;
mod error;
mod models;
mod service;

pub use client::{SpotifyClient, DEFAULT_API_BASE, MAX_TRACKS_PER_REQUEST};
pub use error::SpotifyError;
