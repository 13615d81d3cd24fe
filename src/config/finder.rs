//! Finder Configuration
//!
//! The endpoint and symbol allow-set are compiled in. `FinderConfig::default()`
//! is what the binary runs with; other values exist for tests.

use reqwest::Url;
use thiserror::Error;

use crate::domain::token::{SymbolAllowSet, USDBC, USDC};

/// CoinGecko token list for the Base chain
pub const TOKEN_LIST_URL: &str = "https://tokens.coingecko.com/base/all.json";

/// Symbols selected for output
pub const SYMBOLS: [&str; 2] = [USDC, USDBC];

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid token list endpoint '{0}': {1}")]
    InvalidEndpoint(String, String),
    #[error("Symbol allow-set is empty")]
    EmptyAllowSet,
}

#[derive(Debug, Clone)]
pub struct FinderConfig {
    /// Token list URL (http or https)
    pub endpoint: String,
    /// Symbols to report, stored uppercase
    pub allow_set: SymbolAllowSet,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            endpoint: TOKEN_LIST_URL.to_string(),
            allow_set: SymbolAllowSet::new(SYMBOLS),
        }
    }
}

impl FinderConfig {
    /// Default allow-set against a different endpoint
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = Url::parse(&self.endpoint)
            .map_err(|e| ConfigError::InvalidEndpoint(self.endpoint.clone(), e.to_string()))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidEndpoint(
                self.endpoint.clone(),
                format!("unsupported scheme '{}'", url.scheme()),
            ));
        }

        if self.allow_set.is_empty() {
            return Err(ConfigError::EmptyAllowSet);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FinderConfig::default();
        assert_eq!(config.endpoint, "https://tokens.coingecko.com/base/all.json");
        assert_eq!(config.allow_set.len(), 2);
        assert!(config.allow_set.contains("USDC"));
        assert!(config.allow_set.contains("USDBC"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_with_endpoint_keeps_allow_set() {
        let config = FinderConfig::with_endpoint("http://127.0.0.1:8080/all.json");
        assert_eq!(config.allow_set, SymbolAllowSet::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_endpoints() {
        let config = FinderConfig::with_endpoint("not a url");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidEndpoint(..))
        ));

        let config = FinderConfig::with_endpoint("ftp://tokens.example.com/all.json");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidEndpoint(..))
        ));
    }

    #[test]
    fn test_rejects_empty_allow_set() {
        let config = FinderConfig {
            allow_set: SymbolAllowSet::new(Vec::<String>::new()),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::EmptyAllowSet)));
    }
}
