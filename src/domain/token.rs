//! Token List Domain Types
//!
//! The parsed token list document, the fixed symbol allow-set, and the filter
//! that turns one into the other's `MatchResult`s.

use std::collections::BTreeSet;
use std::fmt;

use serde::Deserialize;
use serde_json::Value;

/// Circle's native USDC
pub const USDC: &str = "USDC";
/// Bridged USD Base Coin (listed as "USDbC")
pub const USDBC: &str = "USDBC";

/// Printed in place of an address that is absent or null
pub const MISSING_ADDRESS: &str = "null";

/// One entry of the fetched token list
///
/// Only `symbol` and `address` are read; everything else in the record is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TokenRecord {
    /// Token symbol as published (any letter case)
    #[serde(default)]
    pub symbol: String,
    /// Chain-specific contract address, kept untyped until a record matches
    #[serde(default)]
    pub address: Option<Value>,
}

impl TokenRecord {
    #[cfg(test)]
    pub fn new(symbol: impl Into<String>, address: Option<&str>) -> Self {
        Self {
            symbol: symbol.into(),
            address: address.map(|a| Value::String(a.to_string())),
        }
    }

    /// Symbol in the uppercase form used for allow-set lookups
    pub fn normalized_symbol(&self) -> String {
        self.symbol.to_uppercase()
    }

    /// Address as printed: strings unquoted, other values as JSON text,
    /// `None` when absent or null
    pub fn address_text(&self) -> Option<String> {
        match &self.address {
            None | Some(Value::Null) => None,
            Some(Value::String(address)) => Some(address.clone()),
            Some(other) => Some(other.to_string()),
        }
    }
}

/// Token list document (`{ "tokens": [...] }`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TokenList {
    /// Absent `tokens` is treated as an empty list
    #[serde(default)]
    pub tokens: Vec<TokenRecord>,
}

impl TokenList {
    #[cfg(test)]
    pub fn new(tokens: Vec<TokenRecord>) -> Self {
        Self { tokens }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Records whose symbol is in `allow_set`, in list order
    pub fn find_matches(&self, allow_set: &SymbolAllowSet) -> Vec<MatchResult> {
        self.tokens
            .iter()
            .filter_map(|record| allow_set.match_record(record))
            .collect()
    }
}

/// Fixed set of symbols selected for output, stored uppercase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolAllowSet {
    symbols: BTreeSet<String>,
}

impl SymbolAllowSet {
    pub fn new<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            symbols: symbols
                .into_iter()
                .map(|s| s.as_ref().to_uppercase())
                .collect(),
        }
    }

    /// Case-insensitive membership test
    pub fn contains(&self, symbol: &str) -> bool {
        self.symbols.contains(&symbol.to_uppercase())
    }

    /// Match a record against the set, yielding the allow-set spelling of its symbol
    pub fn match_record(&self, record: &TokenRecord) -> Option<MatchResult> {
        let symbol = record.normalized_symbol();
        if !self.symbols.contains(&symbol) {
            return None;
        }

        Some(MatchResult {
            symbol,
            address: record.address_text(),
        })
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.symbols.iter().map(String::as_str)
    }
}

impl Default for SymbolAllowSet {
    fn default() -> Self {
        Self::new([USDC, USDBC])
    }
}

/// A matching (symbol, address) pair, displayed as `<SYMBOL> <ADDRESS>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub symbol: String,
    pub address: Option<String>,
}

impl MatchResult {
    pub fn address_or_missing(&self) -> &str {
        self.address.as_deref().unwrap_or(MISSING_ADDRESS)
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.symbol, self.address_or_missing())
    }
}
