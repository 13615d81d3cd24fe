//! Application Layer - Use cases
//!
//! - `finder`: one-shot lookup of allow-set symbols in a token list

pub mod finder;

pub use finder::{write_matches, FinderError, TokenFinder};
