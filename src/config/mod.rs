//! Configuration Module
//!
//! Compiled-in endpoint and symbol allow-set, with validation.

pub mod finder;

pub use finder::{ConfigError, FinderConfig, SYMBOLS, TOKEN_LIST_URL};
