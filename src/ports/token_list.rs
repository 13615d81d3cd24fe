//! Token List Port
//!
//! Abstraction over wherever the token list comes from, so the finder can be
//! driven by the CoinGecko client in production and by mocks in tests.

use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;

use crate::domain::token::TokenList;

/// Errors that can occur when fetching a token list
#[derive(Debug, Error)]
pub enum TokenListError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Token list endpoint returned {status}: {body}")]
    HttpStatus { status: StatusCode, body: String },

    #[error("Failed to parse token list: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Unexpected token list shape: {0}")]
    UnexpectedShape(String),
}

impl TokenListError {
    /// The request did not complete or came back with a non-success status
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::HttpStatus { .. })
    }

    /// The body arrived but is not a usable token list
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_) | Self::UnexpectedShape(_))
    }
}

/// Source of a token list document
#[async_trait]
pub trait TokenListSource: Send + Sync {
    /// Fetch and parse the full list. Issues exactly one request, no retries.
    async fn fetch_token_list(&self) -> Result<TokenList, TokenListError>;

    /// Where the list is fetched from (for diagnostics)
    fn endpoint(&self) -> &str;
}
