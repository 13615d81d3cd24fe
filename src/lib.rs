//! token-finder - CoinGecko token list lookup library
//!
//! Finds the USDC and USDbC contract addresses on Base in the public CoinGecko
//! token list.
//!
//! # Modules
//!
//! - `domain`: Token records, the symbol allow-set, and the filter
//! - `ports`: Trait abstractions (TokenListSource)
//! - `adapters`: External implementations (CoinGecko HTTP client, CLI)
//! - `config`: Compiled-in endpoint and allow-set
//! - `application`: The TokenFinder use case

pub mod domain;
pub mod ports;
pub mod adapters;
pub mod config;
pub mod application;
