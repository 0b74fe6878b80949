use crate::args::CliArgs;
use playlist_publisher::Visibility;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("no Spotify access token given (use --token or SPOTIFY_ACCESS_TOKEN), or pass --dry-run")]
    MissingToken,
}

/// Where and how to reach Spotify
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpotifySettings {
    pub token: String,
    pub api_base: String,
}

/// What a run is allowed to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionMode {
    /// Only print the normalized playlists
    DryRun,

    /// Create the playlists on Spotify
    Publish(SpotifySettings),
}

/// Validated run configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub document: PathBuf,
    pub execution_mode: ExecutionMode,
    pub visibility: Visibility,
    pub verbose: bool,
}

impl Config {
    /// Create configuration from CLI arguments
    pub fn from_args(args: CliArgs) -> Result<Self, ConfigError> {
        let execution_mode = if args.dry_run {
            ExecutionMode::DryRun
        } else {
            let token = args
                .token
                .filter(|token| !token.trim().is_empty())
                .ok_or(ConfigError::MissingToken)?;
            ExecutionMode::Publish(SpotifySettings {
                token,
                api_base: args.api_base,
            })
        };

        let visibility = if args.public {
            Visibility::Public
        } else {
            Visibility::Private
        };

        Ok(Self {
            document: args.document,
            execution_mode,
            visibility,
            verbose: args.verbose,
        })
    }

    pub fn is_dry_run(&self) -> bool {
        self.execution_mode == ExecutionMode::DryRun
    }

    /// Filter used when `RUST_LOG` is not set
    pub fn default_log_filter(&self) -> &'static str {
        if self.verbose {
            "playlist_import=debug,playlist_normalizer=debug,playlist_publisher=debug,spotify_client=debug"
        } else {
            "playlist_import=info,playlist_publisher=info"
        }
    }
}
