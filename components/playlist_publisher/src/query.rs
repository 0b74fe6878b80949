use playlist_primitives::TrackDescriptor;

/// What the publisher has to do to get an identifier for one track
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackRequest<'a> {
    /// The track already names its catalog identifier
    Resolved(&'a str),

    /// Ask the catalog with this query
    Search(String),

    /// No title and no identifier: nothing to search for
    Untitled,
}

impl<'a> TrackRequest<'a> {
    pub fn for_track(track: &'a TrackDescriptor) -> Self {
        if let Some(uri) = track.uri() {
            return TrackRequest::Resolved(uri);
        }

        let Some(title) = track.title() else {
            return TrackRequest::Untitled;
        };

        let mut query = title.to_string();
        if let Some(artist) = track.artist() {
            query.push_str(" artist:");
            query.push_str(artist);
        }
        if let Some(album) = track.album() {
            query.push_str(" album:");
            query.push_str(album);
        }
        TrackRequest::Search(query)
    }
}
