//! Constants for the CoinGecko client
//!
//! Compile-time defaults live here. Anything that differs between the public
//! and the API-key endpoint is carried by [`ClientConfig`](crate::config::ClientConfig)
//! instead.

/// Public CoinGecko API base URL
pub const PUBLIC_API_URL: &str = "https://api.coingecko.com/api/v3";

/// Base URL for API-key ("pro") access
pub const PRO_API_URL: &str = "https://pro-api.coingecko.com/api/v3";

/// Request header carrying the pro API key
pub const PRO_API_KEY_HEADER: &str = "x-cg-pro-api-key";

/// HTTP request timeout (in seconds)
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// User agent for HTTP requests
pub const USER_AGENT: &str = "gecko-sdk/0.1.0";

/// Page size used when the caller asks for none or an out-of-range one
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Largest page size the API accepts
pub const MAX_PAGE_SIZE: u32 = 250;

/// Largest `precision` value accepted by `/simple/price`
pub const MAX_PRICE_PRECISION: u8 = 18;

/// Environment variable holding a pro API key
pub const ENV_API_KEY: &str = "COINGECKO_API_KEY";

/// Environment variable overriding the base URL
pub const ENV_BASE_URL: &str = "COINGECKO_BASE_URL";

/// Environment variable overriding the request timeout (seconds)
pub const ENV_TIMEOUT_SECS: &str = "COINGECKO_TIMEOUT_SECS";

/// Response header names consumed by the metadata decoder
pub mod headers {
    pub const CACHE_CONTROL: &str = "cache-control";
    pub const EXPIRES: &str = "expires";
    pub const LINK: &str = "link";
    pub const PER_PAGE: &str = "per-page";
    pub const TOTAL: &str = "total";
}
