//! Adapters Layer - External System Implementations
//!
//! This module contains implementations of the port traits:
//! - CoinGecko: token list HTTP client
//! - CLI: Command-line interface definition

pub mod coingecko;
pub mod cli;

pub use coingecko::CoingeckoTokenList;
pub use cli::CliApp;
