use playlist_primitives::TrackDescriptor;

const ARTIST_TITLE_SEPARATOR: &str = " - ";

/// Parse a filename-like string into a track.
///
/// The directory prefix and one trailing extension are dropped. What remains
/// is split on the first `" - "` into artist and title; without a separator
/// the whole stem is the title.
pub fn parse_track_string(raw: &str) -> TrackDescriptor {
    let base = raw.rsplit(['/', '\\']).next().unwrap_or(raw);
    let stem = strip_extension(base);

    match stem.split_once(ARTIST_TITLE_SEPARATOR) {
        Some((artist, title)) => TrackDescriptor::new(title).with_artist(artist),
        None => TrackDescriptor::new(stem),
    }
}

// Leading dots belong to the name (".hidden" has no extension)
fn strip_extension(base: &str) -> &str {
    match base.rfind('.') {
        Some(dot) if base[..dot].chars().any(|c| c != '.') => &base[..dot],
        _ => base,
    }
}
