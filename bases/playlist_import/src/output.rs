use playlist_normalizer::PlaylistPlan;
use playlist_publisher::{PlaylistOutcome, PublishReport};
use std::error::Error;

/// One line of human-readable output and the stream it belongs on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Out(String),
    Err(String),
}

pub struct OutputHandler {
    verbose: bool,
}

impl OutputHandler {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    pub fn print_plan(&self, plan: &PlaylistPlan) -> serde_json::Result<()> {
        if plan.is_empty() {
            eprintln!("{}", NO_TRACKS);
            return Ok(());
        }
        println!("{}", serde_json::to_string_pretty(plan)?);
        Ok(())
    }

    pub fn print_report(&self, report: &PublishReport) {
        for line in self.report_lines(report) {
            match line {
                Line::Out(text) => println!("{}", text),
                Line::Err(text) => eprintln!("{}", text),
            }
        }
    }

    pub fn report_lines(&self, report: &PublishReport) -> Vec<Line> {
        if report.is_empty_plan() {
            return vec![Line::Err(NO_TRACKS.to_string())];
        }

        let mut lines = Vec::new();
        for outcome in report {
            match outcome {
                PlaylistOutcome::Published {
                    name,
                    added,
                    missed,
                    untitled,
                    ..
                } => {
                    lines.extend(
                        missed
                            .iter()
                            .map(|track| Line::Err(format!("Track not found: {}", track))),
                    );
                    if self.verbose && *untitled > 0 {
                        lines.push(Line::Err(format!(
                            "Skipped {} tracks without a title in '{}'",
                            untitled, name
                        )));
                    }
                    lines.push(Line::Out(format!(
                        "Created playlist '{}' with {} tracks",
                        name, added
                    )));
                }
                PlaylistOutcome::Skipped { name } => {
                    if self.verbose {
                        lines.push(Line::Err(format!("Skipped playlist '{}': no tracks", name)));
                    }
                }
                PlaylistOutcome::Failed { name, error, added } => {
                    lines.push(Line::Err(format!(
                        "Failed to publish playlist '{}': {}",
                        name, error
                    )));
                    if self.verbose {
                        let mut cause = error.source();
                        while let Some(inner) = cause {
                            lines.push(Line::Err(format!("  caused by: {}", inner)));
                            cause = inner.source();
                        }
                        lines.push(Line::Err(format!("  {} tracks were added before the failure", added)));
                    }
                }
            }
        }
        lines
    }

    pub fn print_error(&self, error: &color_eyre::Report) {
        eprintln!("Error: {}", error);

        if self.verbose {
            eprintln!("\nError details:");
            error.chain().skip(1).for_each(|cause| {
                eprintln!("  caused by: {}", cause);
            });
        }
    }
}

const NO_TRACKS: &str = "No tracks found in JSON";

#[cfg(test)]
mod tests {
    use super::*;
    use playlist_normalizer::TrackDescriptor;
    use playlist_publisher::{MissedTrack, PlaylistId, PublishError, ServiceError};

    fn report(outcomes: Vec<PlaylistOutcome>) -> PublishReport {
        let mut report = PublishReport::new();
        for outcome in outcomes {
            report.push(outcome);
        }
        report
    }

    fn published(name: &str, added: usize, missed: Vec<MissedTrack>) -> PlaylistOutcome {
        PlaylistOutcome::Published {
            name: name.to_string(),
            playlist_id: PlaylistId::new("id"),
            added,
            missed,
            untitled: 0,
        }
    }

    #[test]
    fn empty_plan_says_no_tracks() {
        let lines = OutputHandler::new(false).report_lines(&PublishReport::new());
        assert_eq!(lines, vec![Line::Err("No tracks found in JSON".to_string())]);
    }

    #[test]
    fn misses_precede_success_line() {
        let missed = MissedTrack {
            track: TrackDescriptor::new("Ghost").with_artist("Nobody"),
            query: "Ghost artist:Nobody".to_string(),
        };
        let lines = OutputHandler::new(false).report_lines(&report(vec![published(
            "Mix",
            4,
            vec![missed],
        )]));

        assert_eq!(
            lines,
            vec![
                Line::Err("Track not found: Ghost - Nobody (unknown album)".to_string()),
                Line::Out("Created playlist 'Mix' with 4 tracks".to_string()),
            ]
        );
    }

    #[test]
    fn skipped_playlists_are_quiet_unless_verbose() {
        let skipped = || PlaylistOutcome::Skipped {
            name: "Empty".to_string(),
        };

        assert!(OutputHandler::new(false)
            .report_lines(&report(vec![skipped()]))
            .is_empty());
        assert_eq!(
            OutputHandler::new(true).report_lines(&report(vec![skipped()])),
            vec![Line::Err("Skipped playlist 'Empty': no tracks".to_string())]
        );
    }

    #[test]
    fn failures_go_to_stderr_with_causes_when_verbose() {
        let failed = || PlaylistOutcome::Failed {
            name: "Broken".to_string(),
            error: PublishError::Create {
                name: "Broken".to_string(),
                source: ServiceError::Connection("timed out".to_string()),
            },
            added: 0,
        };

        let quiet = OutputHandler::new(false).report_lines(&report(vec![failed()]));
        assert_eq!(
            quiet,
            vec![Line::Err(
                "Failed to publish playlist 'Broken': failed to create playlist 'Broken'".to_string()
            )]
        );

        let verbose = OutputHandler::new(true).report_lines(&report(vec![failed()]));
        assert!(verbose.contains(&Line::Err("  caused by: connection error: timed out".to_string())));
    }
}
