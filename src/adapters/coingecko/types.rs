//! CoinGecko token list document parsing

use serde_json::Value;

use crate::domain::token::TokenList;
use crate::ports::token_list::TokenListError;

/// Parse a token list response body.
///
/// The top level must be a JSON object. A missing `tokens` field is an empty
/// list, but a `tokens` that is present with the wrong type is rejected.
pub fn parse_token_list(body: &str) -> Result<TokenList, TokenListError> {
    let document: Value = serde_json::from_str(body)?;

    if !document.is_object() {
        return Err(TokenListError::UnexpectedShape(format!(
            "expected a JSON object at the top level, got {}",
            json_kind(&document)
        )));
    }

    Ok(serde_json::from_value(document)?)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
