use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::adapters::coingecko::parse_token_list;
use crate::domain::token::TokenList;
use crate::ports::token_list::{TokenListError, TokenListSource};

#[derive(Debug, Clone)]
enum MockResponse {
    Body(String),
    Status(StatusCode),
}

/// Mock token list source that records calls and replays a canned response
#[derive(Debug, Clone)]
pub struct MockTokenListSource {
    response: MockResponse,
    calls: Arc<Mutex<usize>>,
}

impl MockTokenListSource {
    /// Respond with a raw body, parsed the same way the HTTP adapter parses it
    pub fn with_body(body: impl Into<String>) -> Self {
        Self {
            response: MockResponse::Body(body.into()),
            calls: Arc::new(Mutex::new(0)),
        }
    }

    /// Respond with a non-success HTTP status
    pub fn with_status(status: u16) -> Self {
        Self {
            response: MockResponse::Status(StatusCode::from_u16(status).unwrap()),
            calls: Arc::new(Mutex::new(0)),
        }
    }

    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl TokenListSource for MockTokenListSource {
    async fn fetch_token_list(&self) -> Result<TokenList, TokenListError> {
        *self.calls.lock().unwrap() += 1;
        match &self.response {
            MockResponse::Body(body) => parse_token_list(body),
            MockResponse::Status(status) => Err(TokenListError::HttpStatus {
                status: *status,
                body: String::new(),
            }),
        }
    }

    fn endpoint(&self) -> &str {
        "mock://token-list"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_records_calls() {
        let mock = MockTokenListSource::with_body(r#"{"tokens": []}"#);

        let list = mock.fetch_token_list().await.unwrap();
        assert!(list.is_empty());
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn test_mock_status_is_transport_error() {
        let mock = MockTokenListSource::with_status(500);

        let err = mock.fetch_token_list().await.unwrap_err();
        assert!(err.is_transport());
    }
}
