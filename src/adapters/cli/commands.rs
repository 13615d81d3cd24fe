//! CLI Definition
//!
//! The finder takes no positional arguments and no options that change what it
//! looks up. The only flags control diagnostic logging on stderr.

use clap::Parser;

/// token-finder - USDC/USDbC contract addresses on Base
#[derive(Parser, Debug)]
#[command(
    name = "token-finder",
    version = env!("CARGO_PKG_VERSION"),
    author = env!("CARGO_PKG_AUTHORS"),
    about = "Print the Base USDC and USDbC contract addresses from the CoinGecko token list",
    long_about = "Downloads https://tokens.coingecko.com/base/all.json and prints one \
                  '<SYMBOL> <ADDRESS>' line per token whose symbol is USDC or USDBC \
                  (case-insensitive), in list order."
)]
pub struct CliApp {
    /// Enable verbose logging (stderr)
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable debug logging (stderr)
    #[arg(long)]
    pub debug: bool,
}

/// Log filter directive selected by the flags; debug wins over verbose
pub fn log_directive(verbose: bool, debug: bool) -> &'static str {
    if debug {
        "debug"
    } else if verbose {
        "info"
    } else {
        "warn"
    }
}

impl CliApp {
    pub fn log_directive(&self) -> &'static str {
        log_directive(self.verbose, self.debug)
    }
}
