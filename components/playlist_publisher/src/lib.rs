//! Materializes a [`PlaylistPlan`](playlist_primitives::PlaylistPlan) on a
//! music service.
//!
//! The service is reached only through two narrow traits,
//! [`CatalogLookup`] and [`PlaylistMutator`], so the publishing logic can be
//! driven by any backend (or a stub in tests).

mod error;
mod publisher;
mod query;
mod report;
mod service;

pub use error::{PublishError, ServiceError};
pub use publisher::{PlaylistPublisher, MAX_BATCH_SIZE};
pub use query::TrackRequest;
pub use report::{MissedTrack, PlaylistOutcome, PublishReport};
pub use service::{CatalogLookup, PlaylistId, PlaylistMutator, Visibility};
