mod app;
mod args;
mod config;
mod output;

use app::App;
use args::CliArgs;
use clap::Parser;
use color_eyre::Result;
use config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    // Usage problems exit with 1; --help and --version exit cleanly
    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        Err(error) => {
            let code = if error.use_stderr() { 1 } else { 0 };
            if let Err(io_error) = error.print() {
                eprintln!("{}", io_error);
            }
            std::process::exit(code);
        }
    };

    let config = match Config::from_args(args) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("Error: {}", error);
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.default_log_filter().into()),
        )
        .init();

    let app = App::new(config);

    if let Err(error) = app.run().await {
        app.print_error(&error);
        std::process::exit(1);
    }
    Ok(())
}
