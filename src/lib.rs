pub mod cli;
pub mod core;
pub mod providers;

use crate::core::config::AppConfig;
use crate::core::{RateCache, RateFetcher};
use anyhow::Result;
use std::sync::Arc;
use tracing::{debug, info};

pub enum AppCommand {
    Convert { amount: String },
    Rates,
    Interactive,
}

/// Wires the configured quote provider to a fresh rate cache.
pub fn build_fetcher(config: &AppConfig) -> Result<RateFetcher> {
    let provider =
        providers::awesome_api::AwesomeApiProvider::new(&config.providers.awesome_api.base_url)?;
    let cache = Arc::new(RateCache::with_duration(config.cache_duration()));
    Ok(RateFetcher::new(Box::new(provider), cache))
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("cambio starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let fetcher = build_fetcher(&config)?;

    match command {
        AppCommand::Convert { amount } => cli::convert::run(&amount, &fetcher).await?,
        AppCommand::Rates => cli::rates::run(&fetcher).await?,
        AppCommand::Interactive => {
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            cli::interactive::run(stdin, &mut std::io::stdout(), &fetcher).await?
        }
    }
    Ok(())
}
