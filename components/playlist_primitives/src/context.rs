/// Artist and album metadata inherited from enclosing document keys.
///
/// A context is `Copy` and borrows from the document being walked. Each level
/// of recursion receives its own (possibly overridden) value; nothing is ever
/// written back to a parent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Context<'a> {
    artist: Option<&'a str>,
    album: Option<&'a str>,
}

impl<'a> Context<'a> {
    /// Context with nothing inherited
    pub fn empty() -> Self {
        Self::default()
    }

    /// Context seeded from an `artist -> album` pair of keys
    pub fn for_album(artist: &'a str, album: &'a str) -> Self {
        Self {
            artist: non_blank(artist),
            album: non_blank(album),
        }
    }

    pub fn artist(&self) -> Option<&'a str> {
        self.artist
    }

    pub fn album(&self) -> Option<&'a str> {
        self.album
    }

    /// Context for a child reached through `key`.
    ///
    /// The first artist found on the way down wins; the key only fills in
    /// when nothing was inherited yet. Album passes through untouched.
    pub fn descend(self, key: &'a str) -> Self {
        Self {
            artist: self.artist.or_else(|| non_blank(key)),
            album: self.album,
        }
    }
}

fn non_blank(s: &str) -> Option<&str> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}
