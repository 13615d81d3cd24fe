//! CoinGecko Token List Client
//!
//! Fetches the chain token list published at `tokens.coingecko.com`.
//!
//! One GET per fetch with the HTTP client's default settings: no extra headers,
//! no timeout override, no retries. Any non-2xx status is an error.

use async_trait::async_trait;
use reqwest::Client;

use super::types::parse_token_list;
use crate::config::FinderConfig;
use crate::domain::token::TokenList;
use crate::ports::token_list::{TokenListError, TokenListSource};

/// Longest error body kept in a status error
const MAX_ERROR_BODY_CHARS: usize = 200;

/// CoinGecko token list client
#[derive(Debug, Clone)]
pub struct CoingeckoTokenList {
    endpoint: String,
    http: Client,
}

impl CoingeckoTokenList {
    /// Create a client for the endpoint in `config`
    pub fn with_config(config: &FinderConfig) -> Result<Self, TokenListError> {
        let http = Client::builder().build()?;

        Ok(Self {
            endpoint: config.endpoint.clone(),
            http,
        })
    }

    async fn fetch_body(&self) -> Result<String, TokenListError> {
        tracing::debug!(endpoint = %self.endpoint, "Requesting token list");
        let response = self.http.get(&self.endpoint).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("Token list request failed with status {}", status);
            return Err(TokenListError::HttpStatus {
                status,
                body: truncate(&body, MAX_ERROR_BODY_CHARS),
            });
        }

        let body = response.text().await?;
        tracing::debug!("Received {} bytes", body.len());
        Ok(body)
    }
}

#[async_trait]
impl TokenListSource for CoingeckoTokenList {
    async fn fetch_token_list(&self) -> Result<TokenList, TokenListError> {
        let body = self.fetch_body().await?;
        parse_token_list(&body)
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    let text = text.trim();
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}
