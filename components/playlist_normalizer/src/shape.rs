use crate::gather::{gather, leaf_descriptor, TRACKS};
use playlist_primitives::{Context, PlaylistPlan, DEFAULT_PLAYLIST_NAME};
use serde_json::{Map, Value};
use tracing::{debug, warn};

const PLAYLIST_NAME: &str = "playlist_name";

/// Normalize a parsed document into named, ordered track lists.
///
/// Never fails: shapes it does not recognise produce an empty plan.
pub fn normalize(document: &Value) -> PlaylistPlan {
    let plan = match document {
        Value::Object(map) if map.contains_key(TRACKS) || map.contains_key(PLAYLIST_NAME) => {
            explicit_playlist(document, map)
        }
        Value::Object(map) => artist_album_playlists(map),
        _ => {
            debug!("document is neither an explicit playlist nor an artist mapping");
            PlaylistPlan::new()
        }
    };

    debug!(
        playlists = plan.len(),
        tracks = plan.track_count(),
        "normalized document"
    );
    plan
}

/// `{"playlist_name": ..., "tracks": ...}`, either key optional
fn explicit_playlist(document: &Value, map: &Map<String, Value>) -> PlaylistPlan {
    let name = match map.get(PLAYLIST_NAME) {
        Some(Value::String(name)) if !name.is_empty() => name.as_str(),
        None => DEFAULT_PLAYLIST_NAME,
        Some(other) => {
            warn!(
                playlist_name = %other,
                "playlist_name is not a usable string, using '{}'",
                DEFAULT_PLAYLIST_NAME
            );
            DEFAULT_PLAYLIST_NAME
        }
    };

    let payload = map.get(TRACKS).unwrap_or(document);
    let tracks = match payload {
        Value::Array(items) => items.iter().filter_map(leaf_descriptor).collect(),
        other => {
            let mut tracks = Vec::new();
            gather(other, Context::empty(), &mut tracks);
            tracks
        }
    };

    let mut plan = PlaylistPlan::new();
    plan.insert(name, tracks);
    plan
}

/// `{"Artist": {"Album": <anything>}}`, one playlist per album
fn artist_album_playlists(map: &Map<String, Value>) -> PlaylistPlan {
    let mut plan = PlaylistPlan::new();

    for (artist, albums) in map {
        let Value::Object(albums) = albums else {
            debug!(%artist, "skipping artist whose value is not an album mapping");
            continue;
        };

        for (album, payload) in albums {
            let mut tracks = Vec::new();
            gather(payload, Context::for_album(artist, album), &mut tracks);
            plan.insert(format!("{artist} - {album}"), tracks);
        }
    }

    plan
}
