use crate::descriptor::TrackDescriptor;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Name used when an explicit playlist document does not name itself
pub const DEFAULT_PLAYLIST_NAME: &str = "Imported Playlist";

/// One named playlist and the tracks it should contain, in document order
#[derive(Debug, Clone, PartialEq)]
pub struct PlaylistEntry {
    name: String,
    tracks: Vec<TrackDescriptor>,
}

impl PlaylistEntry {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tracks(&self) -> &[TrackDescriptor] {
        &self.tracks
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}

/// Ordered mapping of playlist name to track list.
///
/// Entries keep insertion order. Inserting a name that already exists
/// replaces its tracks but keeps its original position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaylistPlan {
    entries: Vec<PlaylistEntry>,
}

impl PlaylistPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, tracks: Vec<TrackDescriptor>) {
        let name = name.into();
        match self.entries.iter_mut().find(|entry| entry.name == name) {
            Some(existing) => existing.tracks = tracks,
            None => self.entries.push(PlaylistEntry { name, tracks }),
        }
    }

    pub fn get(&self, name: &str) -> Option<&[TrackDescriptor]> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(PlaylistEntry::tracks)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[PlaylistEntry] {
        &self.entries
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(PlaylistEntry::name)
    }

    /// Number of descriptors across all playlists
    pub fn track_count(&self) -> usize {
        self.entries.iter().map(|entry| entry.tracks.len()).sum()
    }
}

impl<'a> IntoIterator for &'a PlaylistPlan {
    type Item = &'a PlaylistEntry;
    type IntoIter = std::slice::Iter<'a, PlaylistEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// Serialized as a JSON object so a plan reads like the documents it came from
impl Serialize for PlaylistPlan {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.name, &entry.tracks)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order() {
        let mut plan = PlaylistPlan::new();
        plan.insert("Zebra", vec![TrackDescriptor::new("a")]);
        plan.insert("Aardvark", vec![TrackDescriptor::new("b")]);
        plan.insert("Mongoose", Vec::new());

        let names: Vec<_> = plan.names().collect();
        assert_eq!(names, vec!["Zebra", "Aardvark", "Mongoose"]);
        assert_eq!(plan.track_count(), 2);
    }

    #[test]
    fn reinserting_replaces_in_place() {
        let mut plan = PlaylistPlan::new();
        plan.insert("First", vec![TrackDescriptor::new("old")]);
        plan.insert("Second", Vec::new());
        plan.insert("First", vec![TrackDescriptor::new("new")]);

        assert_eq!(plan.len(), 2);
        assert_eq!(plan.entries()[0].name(), "First");
        assert_eq!(plan.get("First"), Some(&[TrackDescriptor::new("new")][..]));
    }

    #[test]
    fn serializes_as_object() {
        let mut plan = PlaylistPlan::new();
        plan.insert(
            "Mezzanine",
            vec![TrackDescriptor::new("Angel").with_artist("Massive Attack")],
        );

        let json = serde_json::to_string(&plan).unwrap();
        assert_eq!(
            json,
            r#"{"Mezzanine":[{"title":"Angel","artist":"Massive Attack"}]}"#
        );
    }
}
