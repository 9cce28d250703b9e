//! SMS Campaign Dashboard - Main Entry Point

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info};

use smsdash_common::init_logging;
use smsdash_config::{ConfigLoader, Settings};
use smsdash_data::DashboardData;
use smsdash_i18n::Translations;
use smsdash_web::{serve, AppState};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path (defaults to ./smsdash.yaml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured log level
    #[arg(short, long)]
    log_level: Option<String>,

    /// Override the configured bind address
    #[arg(short, long)]
    bind: Option<String>,
}

fn load_settings(args: &Args) -> Result<Settings> {
    let mut settings = match &args.config {
        Some(path) => ConfigLoader::load_config(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => ConfigLoader::load().context("Failed to load configuration")?,
    };

    if let Some(level) = &args.log_level {
        settings.logging.level.clone_from(level);
    }
    if let Some(bind) = &args.bind {
        settings.server.bind_address.clone_from(bind);
    }
    Ok(settings)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let settings = load_settings(&args)?;

    init_logging(&settings.logging.to_logging_config())?;
    info!("Starting SMS campaign dashboard v{}", env!("CARGO_PKG_VERSION"));

    let translations = Translations::new().context("Failed to build translations")?;

    // The logs are reloaded per request; this pass only refuses to start
    // with files that cannot be read.
    let data_settings = settings.data.clone();
    let startup = tokio::task::spawn_blocking(move || DashboardData::load(&data_settings)).await?;
    match startup {
        Ok(data) => info!("Found {} sectors", data.sectors.len()),
        Err(e) => {
            error!("Failed to load campaign data: {}", e);
            return Err(e).context("Startup data load failed");
        }
    }

    serve(AppState::new(settings, translations)).await?;
    Ok(())
}
