//! Error types for the CoinGecko client

use thiserror::Error;

/// Errors that can occur when calling a CoinGecko endpoint
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network request failed
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Rate limit exceeded (HTTP 429)
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// The API answered with a status other than 200 OK
    #[error("API error: HTTP {status}: {body}")]
    Api { status: u16, body: String },

    /// Invalid response from the API
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Request parameters rejected before anything was sent
    #[error("Invalid parameters: {0}")]
    InvalidParams(String),

    /// A `/simple/price` payload could not be decoded
    #[error(transparent)]
    PriceParse(#[from] PriceParseError),
}

impl ClientError {
    /// Creates an InvalidResponse error
    pub fn invalid_response(msg: impl Into<String>) -> Self {
        Self::InvalidResponse(msg.into())
    }

    /// Creates an InvalidParams error
    pub fn invalid_params(msg: impl Into<String>) -> Self {
        Self::InvalidParams(msg.into())
    }

    /// Creates an Api error from a status code and response body
    pub fn api(status: u16, body: impl Into<String>) -> Self {
        Self::Api {
            status,
            body: body.into(),
        }
    }
}

/// Errors raised while decoding a compound-key price object
///
/// Every variant names the coin so a caller can locate the bad input
/// without re-deriving context.
#[derive(Debug, Error)]
pub enum PriceParseError {
    /// A price, market cap, volume or change value is not a number
    #[error("error parsing {coin_id}.{key} = {raw}: not a number")]
    InvalidNumber {
        coin_id: String,
        key: String,
        raw: String,
    },

    /// `last_updated_at` is not an integer Unix timestamp
    #[error("error parsing {coin_id}.last_updated_at = {raw}: not a unix timestamp")]
    InvalidTimestamp { coin_id: String, raw: String },

    /// The value for a coin is not a JSON object
    #[error("error parsing {coin_id}: expected an object")]
    NotAnObject { coin_id: String },

    /// The payload is not valid JSON
    #[error("malformed price payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl PriceParseError {
    /// Creates an InvalidNumber error
    pub fn invalid_number(coin_id: &str, key: &str, raw: impl ToString) -> Self {
        Self::InvalidNumber {
            coin_id: coin_id.to_string(),
            key: key.to_string(),
            raw: raw.to_string(),
        }
    }

    /// Creates an InvalidTimestamp error
    pub fn invalid_timestamp(coin_id: &str, raw: impl ToString) -> Self {
        Self::InvalidTimestamp {
            coin_id: coin_id.to_string(),
            raw: raw.to_string(),
        }
    }

    /// Returns the coin this error refers to, if any
    pub fn coin_id(&self) -> Option<&str> {
        match self {
            Self::InvalidNumber { coin_id, .. }
            | Self::InvalidTimestamp { coin_id, .. }
            | Self::NotAnObject { coin_id } => Some(coin_id),
            Self::Malformed(_) => None,
        }
    }
}
