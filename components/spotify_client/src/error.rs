use playlist_publisher::ServiceError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpotifyError {
    #[error("network error: {0}")]
    Network(String),

    #[error("Spotify API error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("failed to parse Spotify response: {0}")]
    Parse(String),

    #[error("invalid client configuration: {0}")]
    Config(String),

    #[error("cannot add {0} tracks in one request")]
    TooManyTracks(usize),
}

impl From<SpotifyError> for ServiceError {
    fn from(error: SpotifyError) -> Self {
        match error {
            SpotifyError::Network(message) => ServiceError::Connection(message),
            SpotifyError::Api { status, body } => ServiceError::Rejected {
                status,
                message: body,
            },
            other => ServiceError::Protocol(other.to_string()),
        }
    }
}
