//! Domain Layer - Core logic for the token finder
//!
//! Pure types and filtering with no I/O. Fetching happens through the ports layer.

pub mod token;

pub use token::{MatchResult, SymbolAllowSet, TokenList, TokenRecord, MISSING_ADDRESS, USDBC, USDC};
