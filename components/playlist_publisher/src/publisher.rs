use crate::error::PublishError;
use crate::query::TrackRequest;
use crate::report::{MissedTrack, PlaylistOutcome, PublishReport};
use crate::service::{CatalogLookup, PlaylistId, PlaylistMutator, Visibility};
use playlist_primitives::{PlaylistEntry, PlaylistPlan, TrackDescriptor};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Most identifiers a single append call may carry
pub const MAX_BATCH_SIZE: usize = 100;

pub struct PlaylistPublisher {
    catalog: Arc<dyn CatalogLookup + Send + Sync>,
    mutator: Arc<dyn PlaylistMutator + Send + Sync>,
    visibility: Visibility,
}

/// Identifiers found for one playlist's tracks, plus what could not be found
#[derive(Debug, Default)]
struct Resolution {
    uris: Vec<String>,
    missed: Vec<MissedTrack>,
    untitled: usize,
}

impl PlaylistPublisher {
    /// Create a publisher that creates private playlists
    pub fn new(
        catalog: Arc<dyn CatalogLookup + Send + Sync>,
        mutator: Arc<dyn PlaylistMutator + Send + Sync>,
    ) -> Self {
        Self {
            catalog,
            mutator,
            visibility: Visibility::Private,
        }
    }

    pub fn with_visibility(self, visibility: Visibility) -> Self {
        Self { visibility, ..self }
    }

    /// Publish every non-empty entry of the plan, one after the other.
    ///
    /// A failing entry is recorded in the report and does not stop the
    /// entries after it.
    pub async fn publish(&self, plan: &PlaylistPlan) -> PublishReport {
        let mut report = PublishReport::new();

        if plan.is_empty() {
            warn!("no tracks found in document");
            return report;
        }

        for entry in plan {
            let outcome = if entry.is_empty() {
                debug!(playlist = entry.name(), "skipping playlist without tracks");
                PlaylistOutcome::Skipped {
                    name: entry.name().to_string(),
                }
            } else {
                self.publish_entry(entry).await
            };
            report.push(outcome);
        }

        info!(
            published = report.published_count(),
            failed = report.failed_count(),
            tracks = report.total_added(),
            "finished publishing"
        );
        report
    }

    async fn publish_entry(&self, entry: &PlaylistEntry) -> PlaylistOutcome {
        let name = entry.name().to_string();

        let playlist_id = match self.mutator.create(&name, self.visibility).await {
            Ok(id) => id,
            Err(source) => {
                let error = PublishError::Create {
                    name: name.clone(),
                    source,
                };
                return Self::failed(name, error, 0);
            }
        };
        debug!(playlist = %name, id = %playlist_id, "created playlist");

        let resolution = match self.resolve(entry.tracks()).await {
            Ok(resolution) => resolution,
            Err(error) => return Self::failed(name, error, 0),
        };

        let added = match self.append_all(&playlist_id, &resolution.uris).await {
            Ok(added) => added,
            Err((error, added)) => return Self::failed(name, error, added),
        };

        if added == 0 {
            warn!(playlist = %name, "none of the playlist's tracks could be resolved");
        }
        info!(playlist = %name, added, missed = resolution.missed.len(), "published playlist");

        PlaylistOutcome::Published {
            name,
            playlist_id,
            added,
            missed: resolution.missed,
            untitled: resolution.untitled,
        }
    }

    /// Look up every track in order. Misses are collected, service errors abort.
    async fn resolve(&self, tracks: &[TrackDescriptor]) -> Result<Resolution, PublishError> {
        let mut resolution = Resolution::default();

        for track in tracks {
            match TrackRequest::for_track(track) {
                TrackRequest::Resolved(uri) => resolution.uris.push(uri.to_string()),
                TrackRequest::Untitled => {
                    debug!(?track, "dropping track without a title");
                    resolution.untitled += 1;
                }
                TrackRequest::Search(query) => match self.catalog.search(&query).await {
                    Ok(Some(uri)) => {
                        debug!(%query, %uri, "resolved track");
                        resolution.uris.push(uri);
                    }
                    Ok(None) => {
                        warn!(%query, "track not found");
                        resolution.missed.push(MissedTrack {
                            track: track.clone(),
                            query,
                        });
                    }
                    Err(source) => return Err(PublishError::Search { query, source }),
                },
            }
        }

        Ok(resolution)
    }

    /// Append in batches of [`MAX_BATCH_SIZE`]. On failure, also reports how
    /// many identifiers earlier batches already added.
    async fn append_all(
        &self,
        playlist_id: &PlaylistId,
        uris: &[String],
    ) -> Result<usize, (PublishError, usize)> {
        let mut added = 0;

        for (batch, chunk) in uris.chunks(MAX_BATCH_SIZE).enumerate() {
            debug!(id = %playlist_id, batch, size = chunk.len(), "appending batch");
            if let Err(source) = self.mutator.append(playlist_id, chunk).await {
                let error = PublishError::Append {
                    playlist_id: playlist_id.clone(),
                    batch,
                    source,
                };
                return Err((error, added));
            }
            added += chunk.len();
        }

        Ok(added)
    }

    fn failed(name: String, error: PublishError, added: usize) -> PlaylistOutcome {
        warn!(playlist = %name, %error, "giving up on playlist");
        PlaylistOutcome::Failed { name, error, added }
    }
}
