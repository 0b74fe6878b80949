use clap::Parser;
use std::path::PathBuf;

/// Create Spotify playlists from a JSON description of your music
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// JSON document listing playlists, albums or track files
    pub document: PathBuf,

    /// Print the playlists that would be created instead of creating them
    #[arg(long)]
    pub dry_run: bool,

    /// Make created playlists public (they are private by default)
    #[arg(long)]
    pub public: bool,

    /// Spotify OAuth access token with playlist-modify scope
    #[arg(long, env = "SPOTIFY_ACCESS_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Spotify Web API base URL
    #[arg(long, env = "SPOTIFY_API_BASE", default_value = spotify_client::DEFAULT_API_BASE)]
    pub api_base: String,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn document_is_required() {
        let error = CliArgs::try_parse_from(["playlist-import"]).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn only_one_document_is_accepted() {
        let error = CliArgs::try_parse_from(["playlist-import", "a.json", "b.json"]).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn flags_parse() {
        let args = CliArgs::try_parse_from([
            "playlist-import",
            "--dry-run",
            "--public",
            "-v",
            "music.json",
        ])
        .unwrap();

        assert_eq!(args.document, PathBuf::from("music.json"));
        assert!(args.dry_run);
        assert!(args.public);
        assert!(args.verbose);
    }
}
