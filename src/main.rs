//! token-finder - USDC/USDbC contract addresses on Base
//!
//! Downloads the CoinGecko Base token list once and prints `<SYMBOL> <ADDRESS>`
//! for every USDC/USDbC entry. Diagnostics go to stderr.

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use token_finder::adapters::cli::CliApp;
use token_finder::adapters::coingecko::CoingeckoTokenList;
use token_finder::application::TokenFinder;
use token_finder::config::FinderConfig;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let app = CliApp::parse();
    init_logging(app.log_directive())?;

    let config = FinderConfig::default();
    config.validate().context("Invalid finder configuration")?;

    let source = CoingeckoTokenList::with_config(&config)
        .context("Failed to create token list client")?;
    let finder = TokenFinder::new(source, config.allow_set.clone());

    let mut stdout = std::io::stdout().lock();
    let printed = finder
        .run(&mut stdout)
        .await
        .with_context(|| format!("Failed to look up tokens from {}", config.endpoint))?;

    tracing::info!("Printed {} matching tokens", printed);
    Ok(())
}

fn init_logging(directive: &str) -> Result<()> {
    fmt()
        .with_env_filter(EnvFilter::new(directive))
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))
}
