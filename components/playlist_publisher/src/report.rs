use crate::error::PublishError;
use crate::service::PlaylistId;
use playlist_primitives::TrackDescriptor;
use std::fmt;

/// A track the catalog had no match for
#[derive(Debug, Clone, PartialEq)]
pub struct MissedTrack {
    pub track: TrackDescriptor,
    pub query: String,
}

impl fmt::Display for MissedTrack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.track)
    }
}

/// What happened to one entry of the plan
#[derive(Debug)]
pub enum PlaylistOutcome {
    /// Playlist created and every resolved track appended
    Published {
        name: String,
        playlist_id: PlaylistId,
        added: usize,
        missed: Vec<MissedTrack>,
        untitled: usize,
    },

    /// Entry had no tracks, nothing was created
    Skipped { name: String },

    /// A service call failed part way; `added` tracks made it in before that
    Failed {
        name: String,
        error: PublishError,
        added: usize,
    },
}

impl PlaylistOutcome {
    pub fn name(&self) -> &str {
        match self {
            PlaylistOutcome::Published { name, .. }
            | PlaylistOutcome::Skipped { name }
            | PlaylistOutcome::Failed { name, .. } => name,
        }
    }

    pub fn added(&self) -> usize {
        match self {
            PlaylistOutcome::Published { added, .. } | PlaylistOutcome::Failed { added, .. } => {
                *added
            }
            PlaylistOutcome::Skipped { .. } => 0,
        }
    }
}

/// Outcome of publishing a whole plan, one entry per plan entry in order
#[derive(Debug, Default)]
pub struct PublishReport {
    outcomes: Vec<PlaylistOutcome>,
}

impl PublishReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, outcome: PlaylistOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn outcomes(&self) -> &[PlaylistOutcome] {
        &self.outcomes
    }

    /// The plan held no playlists at all
    pub fn is_empty_plan(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn published_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, PlaylistOutcome::Published { .. }))
            .count()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, PlaylistOutcome::Failed { .. }))
            .count()
    }

    pub fn total_added(&self) -> usize {
        self.outcomes.iter().map(PlaylistOutcome::added).sum()
    }

    pub fn missed(&self) -> impl Iterator<Item = &MissedTrack> {
        self.outcomes.iter().flat_map(|outcome| match outcome {
            PlaylistOutcome::Published { missed, .. } => missed.as_slice(),
            _ => &[][..],
        })
    }
}

impl<'a> IntoIterator for &'a PublishReport {
    type Item = &'a PlaylistOutcome;
    type IntoIter = std::slice::Iter<'a, PlaylistOutcome>;

    fn into_iter(self) -> Self::IntoIter {
        self.outcomes.iter()
    }
}
