use crate::context::Context;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

const TITLE: &str = "title";
const NAME: &str = "name";
const ARTIST: &str = "artist";
const ALBUM: &str = "album";
const URI: &str = "uri";

/// A single track the user wants in a playlist.
///
/// Either already resolved (it carries a catalog `uri`) or described well
/// enough to search for: a title plus whatever artist and album are known.
/// Descriptors are never edited in place; [`TrackDescriptor::with_context`]
/// produces a new value.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TrackDescriptor {
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    artist: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    album: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    uri: Option<String>,

    /// Any other keys of the source record, kept as-is
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl TrackDescriptor {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: non_blank(title.into()),
            ..Self::default()
        }
    }

    /// Descriptor pointing straight at a catalog identifier
    pub fn resolved(uri: impl Into<String>) -> Self {
        Self {
            uri: non_blank(uri.into()),
            ..Self::default()
        }
    }

    pub fn with_artist(self, artist: impl Into<String>) -> Self {
        Self {
            artist: non_blank(artist.into()),
            ..self
        }
    }

    pub fn with_album(self, album: impl Into<String>) -> Self {
        Self {
            album: non_blank(album.into()),
            ..self
        }
    }

    /// Shallow copy of a structured record.
    ///
    /// `title`, `artist`, `album` and `uri` always land in their own fields:
    /// strings as-is, other non-null values as their JSON text, so a record's
    /// own `artist: 7` still beats an inherited artist. `name` stands in for a
    /// missing title. Every other key is kept in [`TrackDescriptor::extra`].
    pub fn from_record(record: &Map<String, Value>) -> Self {
        let mut descriptor = Self::default();

        for (key, value) in record {
            match key.as_str() {
                TITLE => descriptor.title = field_text(value),
                ARTIST => descriptor.artist = field_text(value),
                ALBUM => descriptor.album = field_text(value),
                URI => descriptor.uri = field_text(value),
                _ => {
                    descriptor.extra.insert(key.clone(), value.clone());
                }
            }
        }

        if descriptor.title.is_none() {
            descriptor.title = descriptor.extra.get(NAME).and_then(field_text);
        }

        descriptor
    }

    /// Overlay inherited metadata.
    ///
    /// The inherited artist only fills a gap. The inherited album always wins
    /// over whatever the record said.
    pub fn with_context(self, context: &Context<'_>) -> Self {
        let artist = match (self.artist, context.artist()) {
            (None, Some(inherited)) => Some(inherited.to_string()),
            (own, _) => own,
        };
        let album = match context.album() {
            Some(inherited) => Some(inherited.to_string()),
            None => self.album,
        };

        Self {
            artist,
            album,
            ..self
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn artist(&self) -> Option<&str> {
        self.artist.as_deref()
    }

    pub fn album(&self) -> Option<&str> {
        self.album.as_deref()
    }

    pub fn uri(&self) -> Option<&str> {
        self.uri.as_deref()
    }

    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }

    /// Whether the descriptor can reach the catalog at all
    pub fn is_searchable(&self) -> bool {
        self.uri.is_some() || self.title.is_some()
    }
}

impl fmt::Display for TrackDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} ({})",
            self.title().unwrap_or("untitled"),
            self.artist().unwrap_or("unknown artist"),
            self.album().unwrap_or("unknown album"),
        )
    }
}

/// Text of a record field; null and empty strings count as absent
fn field_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => non_blank(s.clone()),
        other => Some(other.to_string()),
    }
}

fn non_blank(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}
