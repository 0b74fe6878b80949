use crate::client::SpotifyClient;
use async_trait::async_trait;
use playlist_publisher::{CatalogLookup, PlaylistId, PlaylistMutator, ServiceError, Visibility};

#[async_trait]
impl CatalogLookup for SpotifyClient {
    async fn search(&self, query: &str) -> Result<Option<String>, ServiceError> {
        Ok(self.search_track(query).await?)
    }
}

#[async_trait]
impl PlaylistMutator for SpotifyClient {
    async fn create(&self, name: &str, visibility: Visibility) -> Result<PlaylistId, ServiceError> {
        let id = self.create_playlist(name, visibility.is_public()).await?;
        Ok(PlaylistId::new(id))
    }

    async fn append(&self, playlist: &PlaylistId, uris: &[String]) -> Result<(), ServiceError> {
        Ok(self.add_tracks(playlist.as_str(), uris).await?)
    }
}
