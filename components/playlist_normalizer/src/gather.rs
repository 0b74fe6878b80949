use crate::filename::parse_track_string;
use playlist_primitives::{Context, TrackDescriptor};
use serde_json::Value;
use tracing::debug;

pub(crate) const TRACKS: &str = "tracks";

/// Collect every track below `node` into `tracks`, in document order.
///
/// - an object with a `tracks` array contributes that array's entries
/// - any other object is descended into key by key, the key standing in as
///   artist when none was inherited
/// - an array contributes its strings and is descended into for nested
///   objects and arrays
/// - other scalars contribute nothing
pub(crate) fn gather<'a>(node: &'a Value, context: Context<'a>, tracks: &mut Vec<TrackDescriptor>) {
    match node {
        Value::Object(map) => match map.get(TRACKS) {
            Some(Value::Array(items)) => {
                tracks.extend(
                    items
                        .iter()
                        .filter_map(leaf_descriptor)
                        .map(|track| track.with_context(&context)),
                );
            }
            _ => {
                for (key, child) in map {
                    gather(child, context.descend(key), tracks);
                }
            }
        },
        Value::Array(items) => {
            for item in items {
                match item {
                    Value::Object(_) | Value::Array(_) => gather(item, context, tracks),
                    Value::String(raw) => {
                        tracks.push(parse_track_string(raw).with_context(&context))
                    }
                    _ => {}
                }
            }
        }
        _ => {}
    }
}

/// A single entry of a track list, taken at face value
pub(crate) fn leaf_descriptor(item: &Value) -> Option<TrackDescriptor> {
    match item {
        Value::String(raw) => Some(parse_track_string(raw)),
        Value::Object(record) => Some(TrackDescriptor::from_record(record)),
        other => {
            debug!(entry = %other, "skipping track entry that is neither a string nor a record");
            None
        }
    }
}
