//! Subtext CLI entry point.

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;

use subtext::cli::{Cli, Commands};
use subtext::domain::models::Config;
use subtext::infrastructure::analysis_api::AnalysisClientImpl;
use subtext::infrastructure::config::ConfigLoader;
use subtext::infrastructure::logging::{LogConfig, LoggerImpl};

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match cli.config {
        Some(ref path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load()?,
    };

    if let Some(ref base_url) = cli.base_url {
        ConfigLoader::validate_base_url(base_url)?;
        config.service.base_url.clone_from(base_url);
    }

    Ok(config)
}

async fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;
    let log_config = LogConfig::try_from(&config.logging)?;
    let _logger = LoggerImpl::init(&log_config).context("Failed to initialize logging")?;

    tracing::debug!(base_url = %config.service.base_url, "configuration loaded");

    let client = AnalysisClientImpl::new(&config.service.base_url)?;
    let base_url = client.base_url().to_string();
    let service = Arc::new(client);

    match cli.command {
        Commands::Analyze(args) => {
            subtext::cli::commands::analyze::execute(args, service, cli.json).await
        }
        Commands::Health => {
            subtext::cli::commands::health::execute(service, &base_url, cli.json).await
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;

    if let Err(err) = run(cli).await {
        subtext::cli::handle_error(err, json_mode);
    }
}
