//! Ports Layer - Trait definitions for external dependencies
//!
//! This module defines the interfaces (ports) that adapters must implement:
//! - Token list sources (CoinGecko HTTP, test mocks)

pub mod token_list;

#[cfg(test)]
pub mod mocks;

pub use token_list::{TokenListError, TokenListSource};
