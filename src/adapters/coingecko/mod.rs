//! CoinGecko Adapter
//!
//! Implementation of the TokenListSource port for the CoinGecko token lists.

mod client;
mod types;

pub use client::CoingeckoTokenList;
pub use types::parse_token_list;
