//! Request and response bodies, limited to the fields this crate reads.

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub(crate) struct CurrentUser {
    pub id: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub tracks: Option<TrackPage>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct TrackPage {
    #[serde(default)]
    pub items: Vec<TrackItem>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TrackItem {
    pub uri: String,
}

impl SearchResponse {
    /// URI of the best match, if the search found anything
    pub fn into_first_uri(self) -> Option<String> {
        self.tracks?.items.into_iter().next().map(|item| item.uri)
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct NewPlaylist<'a> {
    pub name: &'a str,
    pub public: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CreatedPlaylist {
    pub id: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct AddTracks<'a> {
    pub uris: &'a [String],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_search_hit_is_used() {
        let body = r#"{"tracks": {"href": "...", "items": [
            {"uri": "spotify:track:first", "name": "Airbag"},
            {"uri": "spotify:track:second", "name": "Airbag - Live"}
        ], "total": 2}}"#;
        let response: SearchResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.into_first_uri().as_deref(), Some("spotify:track:first"));
    }

    #[test]
    fn empty_search_is_a_miss() {
        let empty: SearchResponse = serde_json::from_str(r#"{"tracks": {"items": []}}"#).unwrap();
        let missing: SearchResponse = serde_json::from_str("{}").unwrap();

        assert_eq!(empty.into_first_uri(), None);
        assert_eq!(missing.into_first_uri(), None);
    }

    #[test]
    fn new_playlist_body() {
        let body = serde_json::to_string(&NewPlaylist {
            name: "Radiohead - OK Computer",
            public: false,
        })
        .unwrap();
        assert_eq!(body, r#"{"name":"Radiohead - OK Computer","public":false}"#);
    }

    #[test]
    fn add_tracks_body() {
        let uris = vec!["spotify:track:a".to_string(), "spotify:track:b".to_string()];
        let body = serde_json::to_string(&AddTracks { uris: &uris }).unwrap();
        assert_eq!(body, r#"{"uris":["spotify:track:a","spotify:track:b"]}"#);
    }
}
