use crate::config::{Config, ExecutionMode, SpotifySettings};
use crate::output::OutputHandler;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use playlist_normalizer::PlaylistPlan;
use playlist_publisher::PlaylistPublisher;
use spotify_client::SpotifyClient;
use std::sync::Arc;
use tracing::info;

pub struct App {
    config: Config,
    output: OutputHandler,
}

impl App {
    pub fn new(config: Config) -> Self {
        let output = OutputHandler::new(config.verbose);
        Self { config, output }
    }

    pub async fn run(&self) -> Result<()> {
        let plan = playlist_normalizer::normalize_file(&self.config.document)
            .wrap_err_with(|| format!("cannot import {}", self.config.document.display()))?;

        info!(
            playlists = plan.len(),
            tracks = plan.track_count(),
            "loaded {}",
            self.config.document.display()
        );

        match &self.config.execution_mode {
            ExecutionMode::DryRun => self.output.print_plan(&plan)?,
            ExecutionMode::Publish(settings) => self.publish(&plan, settings).await?,
        }

        Ok(())
    }

    async fn publish(&self, plan: &PlaylistPlan, settings: &SpotifySettings) -> Result<()> {
        let client = Arc::new(SpotifyClient::with_api_base(
            settings.token.as_str(),
            settings.api_base.as_str(),
        )?);
        let publisher =
            PlaylistPublisher::new(client.clone(), client).with_visibility(self.config.visibility);

        let report = publisher.publish(plan).await;
        self.output.print_report(&report);
        Ok(())
    }

    pub fn print_error(&self, error: &color_eyre::Report) {
        self.output.print_error(error);
    }
}
