//! Terminal dashboard entry point.

use std::fs::File;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use service_tui::app::TuiApp;
use service_tui::config::TuiConfig;

/// Executive financial operations dashboard for the terminal.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Path to a TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => TuiConfig::load_with_env_and_validate(path)?,
        None => {
            let config = TuiConfig::load_or_default().with_env_override();
            config.validate()?;
            config
        }
    };

    // The terminal belongs to the dashboard, so tracing writes to a
    // file when one is configured and stays silent otherwise
    if let Some(path) = &config.log_file {
        let file = File::create(path)?;
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&config.log_level))
            .unwrap_or_else(|_| EnvFilter::new("info"));
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::sync::Mutex::new(file))
                    .with_ansi(false),
            )
            .with(filter)
            .init();
    }

    tracing::info!("Acuity dashboard starting");

    let mut app = TuiApp::new(&config)?;
    app.run().await
}
