//! CoinGecko v3 client
//!
//! Every endpoint builds its URL from the [`ClientConfig`], sends it through
//! the configured [`HttpTransport`] and decodes the body together with the
//! cache and pagination headers.

use crate::{
    config::ClientConfig,
    error::ClientError,
    metadata::{CacheMetadata, PageMetadata},
    params::{CoinTickersParams, CoinsMarketsParams, ExchangesParams, SimplePriceParams},
    price::{parse_simple_price, SimplePrice},
    transport::{HttpTransport, RawResponse, ReqwestTransport},
    types::{
        CoinTickers, CoinsList, CoinsListItem, CoinsMarketItem, CoinsMarkets, Exchange,
        ExchangeRate, Exchanges, Global, Ping, TickerItem,
    },
};
use serde::{de::DeserializeOwned, Deserialize};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

#[derive(Debug, Deserialize)]
struct TickersResponse {
    name: String,
    tickers: Vec<TickerItem>,
}

#[derive(Debug, Deserialize)]
struct ExchangeRatesResponse {
    rates: HashMap<String, ExchangeRate>,
}

#[derive(Debug, Deserialize)]
struct GlobalResponse {
    data: Global,
}

/// Client for the CoinGecko v3 API
#[derive(Clone)]
pub struct GeckoClient {
    config: ClientConfig,
    transport: Arc<dyn HttpTransport>,
}

impl GeckoClient {
    /// Creates a client that talks HTTP through `reqwest`
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let transport = ReqwestTransport::new(&config)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Creates a client for the public API with default settings
    pub fn public() -> Result<Self, ClientError> {
        Self::new(ClientConfig::public())
    }

    /// Creates a client over an arbitrary transport
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport_name(&self) -> &'static str {
        self.transport.transport_name()
    }

    async fn fetch(&self, path: &str, query: Option<&str>) -> Result<RawResponse, ClientError> {
        let url = self.config.endpoint_url(path, query);
        tracing::debug!(url = %url, transport = self.transport_name(), "Fetching from CoinGecko");

        let start = Instant::now();
        let result = self.transport.get(&url).await;
        let latency_ms = start.elapsed().as_millis() as u64;

        match &result {
            Ok(response) => tracing::debug!(
                url = %url,
                bytes = response.body.len(),
                latency_ms,
                "Fetched from CoinGecko"
            ),
            Err(e) => tracing::warn!(url = %url, error = %e, latency_ms, "CoinGecko request failed"),
        }

        result
    }

    fn decode<T: DeserializeOwned>(endpoint: &str, response: &RawResponse) -> Result<T, ClientError> {
        serde_json::from_slice(&response.body).map_err(|e| {
            ClientError::invalid_response(format!(
                "Failed to parse {} response: {}. Response: {}",
                endpoint,
                e,
                response.text()
            ))
        })
    }

    /// Checks API server status
    pub async fn ping(&self) -> Result<Ping, ClientError> {
        let response = self.fetch("/ping", None).await?;
        Self::decode("/ping", &response)
    }

    /// Gets current prices of coins in the requested currencies
    ///
    /// The parameters are validated before anything is sent.
    pub async fn simple_price(&self, params: &SimplePriceParams) -> Result<SimplePrice, ClientError> {
        params.validate()?;

        let query = params.encode();
        let response = self.fetch("/simple/price", Some(&query)).await?;
        let coins = parse_simple_price(&response.body)?;

        tracing::debug!(coins = coins.len(), "Decoded simple prices");

        Ok(SimplePrice {
            cache: CacheMetadata::from_headers(&response.headers),
            coins,
        })
    }

    /// Lists the currency codes `/simple/price` accepts
    pub async fn simple_supported_vs_currencies(&self) -> Result<Vec<String>, ClientError> {
        let response = self.fetch("/simple/supported_vs_currencies", None).await?;
        Self::decode("/simple/supported_vs_currencies", &response)
    }

    /// Lists all supported coins with id, symbol and name
    pub async fn coins_list(&self) -> Result<CoinsList, ClientError> {
        let response = self.fetch("/coins/list", None).await?;
        let entries: Vec<CoinsListItem> = Self::decode("/coins/list", &response)?;

        Ok(CoinsList {
            cache: CacheMetadata::from_headers(&response.headers),
            entries,
        })
    }

    /// Gets one page of coin market data
    pub async fn coins_markets(&self, params: &CoinsMarketsParams) -> Result<CoinsMarkets, ClientError> {
        params.validate()?;

        let query = params.encode();
        let response = self.fetch("/coins/markets", Some(&query)).await?;
        let entries: Vec<CoinsMarketItem> = Self::decode("/coins/markets", &response)?;

        Ok(CoinsMarkets {
            page: PageMetadata::from_headers(&response.headers, i64::from(params.effective_page())),
            entries,
        })
    }

    /// Collects `/coins/markets` pages starting at `params.page`
    ///
    /// Follows the next page reported by the response headers and stops
    /// after `max_pages` requests, on an empty page, or when no next page
    /// is known.
    pub async fn coins_markets_all(
        &self,
        params: &CoinsMarketsParams,
        max_pages: u32,
    ) -> Result<Vec<CoinsMarketItem>, ClientError> {
        let mut params = params.clone();
        let mut entries = Vec::new();
        let mut fetched = 0;

        while fetched < max_pages {
            let current = params.effective_page();
            let page = self.coins_markets(&params).await?;
            fetched += 1;

            let received = page.entries.len();
            entries.extend(page.entries);

            match page.page.next_page() {
                Some(next) if received > 0 && next > current => params.page = next,
                _ => break,
            }
        }

        tracing::info!(pages = fetched, entries = entries.len(), "Collected coin markets");

        Ok(entries)
    }

    /// Gets one page of a coin's tickers
    pub async fn coin_tickers(&self, params: &CoinTickersParams) -> Result<CoinTickers, ClientError> {
        params.validate()?;

        let path = format!("/coins/{}/tickers", params.coin_id);
        let query = params.encode();
        let response = self.fetch(&path, Some(&query)).await?;
        let body: TickersResponse = Self::decode(&path, &response)?;

        Ok(CoinTickers {
            page: PageMetadata::from_headers(&response.headers, i64::from(params.effective_page())),
            name: body.name,
            tickers: body.tickers,
        })
    }

    /// Gets one page of exchanges
    pub async fn exchanges(&self, params: &ExchangesParams) -> Result<Exchanges, ClientError> {
        let query = params.encode();
        let response = self.fetch("/exchanges", Some(&query)).await?;
        let entries: Vec<Exchange> = Self::decode("/exchanges", &response)?;

        Ok(Exchanges {
            page: PageMetadata::from_headers(&response.headers, i64::from(params.effective_page())),
            entries,
        })
    }

    /// Gets BTC exchange rates keyed by currency code
    pub async fn exchange_rates(&self) -> Result<HashMap<String, ExchangeRate>, ClientError> {
        let response = self.fetch("/exchange_rates", None).await?;
        let body: ExchangeRatesResponse = Self::decode("/exchange_rates", &response)?;
        Ok(body.rates)
    }

    /// Gets global cryptocurrency market data
    pub async fn global(&self) -> Result<Global, ClientError> {
        let response = self.fetch("/global", None).await?;
        let body: GlobalResponse = Self::decode("/global", &response)?;
        Ok(body.data)
    }
}
