//! # CoinGecko v3 SDK
//!
//! Typed client for the CoinGecko v3 REST API. Besides the JSON bodies, every
//! response is decoded together with its metadata headers:
//!
//! - `Cache-Control: max-age` and `Expires` become a [`CacheMetadata`]
//! - `Link`, `Per-Page` and `Total` become a [`PageMetadata`]
//!
//! `/simple/price` answers with flat compound keys (`usd`, `usd_market_cap`,
//! `usd_24h_vol`, ...); [`price`] folds them back into one quote per currency.
//!
//! ## Usage
//!
//! ```no_run
//! use gecko_sdk::{ClientConfig, GeckoClient, SimplePriceParams};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeckoClient::new(ClientConfig::from_env())?;
//!
//! let params = SimplePriceParams::new(["bitcoin", "ethereum"], ["usd", "eur"]).with_all_fields();
//! let prices = client.simple_price(&params).await?;
//!
//! if let Some(btc) = prices.price("bitcoin", "usd") {
//!     println!("BTC: ${:.2}", btc);
//! }
//! if let Some(ttl) = prices.cache.ttl() {
//!     println!("fresh for {:?}", ttl);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Pagination
//!
//! ```no_run
//! use gecko_sdk::{CoinsMarketsParams, GeckoClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeckoClient::public()?;
//! let params = CoinsMarketsParams::new("usd").with_page_size(250);
//!
//! let page = client.coins_markets(&params).await?;
//! match page.page.next_page() {
//!     Some(next) => println!("next page: {}", next),
//!     None => println!("last page"),
//! }
//!
//! // Or follow the headers for up to 4 pages
//! let top_1000 = client.coins_markets_all(&params, 4).await?;
//! println!("{} coins", top_1000.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! ```no_run
//! use gecko_sdk::{ClientError, GeckoClient};
//!
//! # async fn example(client: GeckoClient) {
//! match client.ping().await {
//!     Ok(ping) => println!("{}", ping.gecko_says),
//!     Err(ClientError::RateLimitExceeded) => println!("slow down"),
//!     Err(ClientError::Api { status, body }) => eprintln!("HTTP {}: {}", status, body),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! # }
//! ```

pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod metadata;
pub mod params;
pub mod price;
pub mod transport;
pub mod types;

// Re-export commonly used types
pub use client::GeckoClient;
pub use config::ClientConfig;
pub use error::{ClientError, PriceParseError};
pub use metadata::{CacheMetadata, LinkRelation, PageIndexSource, PageMetadata};
pub use params::{CoinTickersParams, CoinsMarketsParams, ExchangesParams, SimplePriceParams};
pub use price::{CurrencyQuote, PriceRecord, SimplePrice};
pub use transport::{HttpTransport, RawResponse, ReqwestTransport};
pub use types::{MarketOrder, Precision, PriceChangeWindow, TickerOrder};
