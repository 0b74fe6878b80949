use crate::error::SpotifyError;
use crate::models::{AddTracks, CreatedPlaylist, CurrentUser, NewPlaylist, SearchResponse};
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::fmt;
use std::time::Duration;
use tokio::sync::OnceCell;

pub const DEFAULT_API_BASE: &str = "https://api.spotify.com/v1";

/// Spotify refuses to add more than this many tracks per request
pub const MAX_TRACKS_PER_REQUEST: usize = 100;

const USER_AGENT: &str = concat!("playlist-import/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Thin Spotify Web API client covering search and playlist editing
pub struct SpotifyClient {
    http_client: reqwest::Client,
    api_base: String,
    token: String,
    user_id: OnceCell<String>,
}

impl SpotifyClient {
    pub fn new(token: impl Into<String>) -> Result<Self, SpotifyError> {
        Self::with_api_base(token, DEFAULT_API_BASE)
    }

    /// Client talking to a different API root (a proxy or a local mock)
    pub fn with_api_base(
        token: impl Into<String>,
        api_base: impl Into<String>,
    ) -> Result<Self, SpotifyError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(SpotifyError::Config("access token is empty".to_string()));
        }

        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| SpotifyError::Network(e.to_string()))?;

        Ok(Self {
            http_client,
            api_base: api_base.into().trim_end_matches('/').to_string(),
            token,
            user_id: OnceCell::new(),
        })
    }

    /// Id of the user the token belongs to, fetched once
    pub async fn current_user_id(&self) -> Result<&str, SpotifyError> {
        self.user_id
            .get_or_try_init(|| async {
                let user: CurrentUser = self.send(self.http_client.get(self.url("/me"))).await?;
                tracing::debug!(user = %user.id, "resolved current Spotify user");
                Ok::<_, SpotifyError>(user.id)
            })
            .await
            .map(String::as_str)
    }

    /// First track matching `query`, if any
    pub async fn search_track(&self, query: &str) -> Result<Option<String>, SpotifyError> {
        let request = self
            .http_client
            .get(self.url("/search"))
            .query(&[("q", query), ("type", "track"), ("limit", "1")]);

        tracing::debug!(%query, "searching Spotify catalog");
        let response: SearchResponse = self.send(request).await?;
        Ok(response.into_first_uri())
    }

    /// Create an empty playlist owned by the current user, returning its id
    pub async fn create_playlist(&self, name: &str, public: bool) -> Result<String, SpotifyError> {
        let user_id = self.current_user_id().await?;
        let request = self
            .http_client
            .post(self.url(&format!("/users/{user_id}/playlists")))
            .json(&NewPlaylist { name, public });

        let created: CreatedPlaylist = self.send(request).await?;
        Ok(created.id)
    }

    /// Append up to [`MAX_TRACKS_PER_REQUEST`] track URIs to a playlist
    pub async fn add_tracks(&self, playlist_id: &str, uris: &[String]) -> Result<(), SpotifyError> {
        if uris.len() > MAX_TRACKS_PER_REQUEST {
            return Err(SpotifyError::TooManyTracks(uris.len()));
        }

        let request = self
            .http_client
            .post(self.url(&format!("/playlists/{playlist_id}/tracks")))
            .json(&AddTracks { uris });

        self.checked(request).await.map(|_| ())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, SpotifyError> {
        self.checked(request)
            .await?
            .json()
            .await
            .map_err(|e| SpotifyError::Parse(e.to_string()))
    }

    async fn checked(&self, request: RequestBuilder) -> Result<Response, SpotifyError> {
        let response = request
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|e| SpotifyError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SpotifyError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response)
    }
}

// Keeps the access token out of logs
impl fmt::Debug for SpotifyClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpotifyClient")
            .field("api_base", &self.api_base)
            .field("user_id", &self.user_id.get())
            .finish_non_exhaustive()
    }
}
