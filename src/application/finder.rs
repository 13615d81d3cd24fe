//! Token Finder
//!
//! Runs the fetch, filter, print pipeline once. Every match is computed before
//! the first line is written, so a failed fetch or parse never leaves partial
//! output behind.

use std::io::{self, Write};

use thiserror::Error;

use crate::domain::token::{MatchResult, SymbolAllowSet};
use crate::ports::token_list::{TokenListError, TokenListSource};

#[derive(Debug, Error)]
pub enum FinderError {
    #[error(transparent)]
    Source(#[from] TokenListError),
    #[error("Failed to write results: {0}")]
    Output(#[from] io::Error),
}

/// Looks up allow-set symbols in a token list
pub struct TokenFinder<S: TokenListSource> {
    source: S,
    allow_set: SymbolAllowSet,
}

impl<S: TokenListSource> TokenFinder<S> {
    pub fn new(source: S, allow_set: SymbolAllowSet) -> Self {
        Self { source, allow_set }
    }

    /// Fetch the list and return the matching records in list order
    pub async fn find(&self) -> Result<Vec<MatchResult>, FinderError> {
        let symbols: Vec<&str> = self.allow_set.iter().collect();
        tracing::info!(
            "Fetching token list from {} (symbols: {})",
            self.source.endpoint(),
            symbols.join(", ")
        );
        let list = self.source.fetch_token_list().await?;

        let matches = list.find_matches(&self.allow_set);
        for found in &matches {
            tracing::debug!(symbol = %found.symbol, address = %found.address_or_missing(), "Match");
        }
        tracing::info!("{} of {} tokens matched", matches.len(), list.len());

        Ok(matches)
    }

    /// Find matches and write one `<SYMBOL> <ADDRESS>` line each to `out`.
    ///
    /// Returns the number of lines written. Zero matches is not an error.
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<usize, FinderError> {
        let matches = self.find().await?;
        write_matches(out, &matches)?;
        Ok(matches.len())
    }
}

pub fn write_matches<W: Write>(out: &mut W, matches: &[MatchResult]) -> io::Result<()> {
    for found in matches {
        writeln!(out, "{}", found)?;
    }
    out.flush()
}
