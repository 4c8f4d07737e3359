//! Request parameters and their query encoding

use crate::{
    constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, MAX_PRICE_PRECISION},
    error::ClientError,
    types::{MarketOrder, Precision, PriceChangeWindow, TickerOrder},
};
use url::form_urlencoded::Serializer;

/// Pages start at 1
pub(crate) fn normalize_page(page: u32) -> u32 {
    page.max(1)
}

pub(crate) fn normalize_page_size(page_size: u32) -> u32 {
    if (1..=MAX_PAGE_SIZE).contains(&page_size) {
        page_size
    } else {
        DEFAULT_PAGE_SIZE
    }
}

fn bool_str(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Parameters for `/simple/price`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimplePriceParams {
    /// Coin ids as listed by `/coins/list`
    pub coin_ids: Vec<String>,
    /// Currencies as listed by `/simple/supported_vs_currencies`
    pub vs_currencies: Vec<String>,
    pub include_market_cap: bool,
    pub include_24hr_vol: bool,
    pub include_24hr_change: bool,
    pub include_last_updated_at: bool,
    pub precision: Option<Precision>,
}

impl SimplePriceParams {
    pub fn new<I, J, S, T>(coin_ids: I, vs_currencies: J) -> Self
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = T>,
        S: Into<String>,
        T: Into<String>,
    {
        Self {
            coin_ids: coin_ids.into_iter().map(Into::into).collect(),
            vs_currencies: vs_currencies.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Requests market cap, 24h volume, 24h change and last update time
    pub fn with_all_fields(mut self) -> Self {
        self.include_market_cap = true;
        self.include_24hr_vol = true;
        self.include_24hr_change = true;
        self.include_last_updated_at = true;
        self
    }

    pub fn with_precision(mut self, precision: Precision) -> Self {
        self.precision = Some(precision);
        self
    }

    /// Checks the parameters before a request is made
    pub fn validate(&self) -> Result<(), ClientError> {
        if self.coin_ids.is_empty() {
            return Err(ClientError::invalid_params(
                "coin_ids is required and must contain at least 1 item",
            ));
        }
        if self.vs_currencies.is_empty() {
            return Err(ClientError::invalid_params(
                "vs_currencies is required and must contain at least 1 item",
            ));
        }
        if let Some(Precision::Decimals(decimals)) = self.precision {
            if decimals > MAX_PRICE_PRECISION {
                return Err(ClientError::invalid_params(format!(
                    "precision must be \"full\" or between 0 and {MAX_PRICE_PRECISION}, got {decimals}"
                )));
            }
        }
        Ok(())
    }

    /// Encodes the query string; flags are only sent when set
    pub fn encode(&self) -> String {
        let mut query = Serializer::new(String::new());
        query.append_pair("ids", &self.coin_ids.join(","));
        query.append_pair("vs_currencies", &self.vs_currencies.join(","));
        if self.include_market_cap {
            query.append_pair("include_market_cap", "true");
        }
        if self.include_24hr_vol {
            query.append_pair("include_24hr_vol", "true");
        }
        if self.include_24hr_change {
            query.append_pair("include_24hr_change", "true");
        }
        if self.include_last_updated_at {
            query.append_pair("include_last_updated_at", "true");
        }
        if let Some(precision) = &self.precision {
            query.append_pair("precision", &precision.to_query_value());
        }
        query.finish()
    }
}

/// Parameters for `/coins/markets`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoinsMarketsParams {
    /// Required target currency (usd, eur, ...)
    pub vs_currency: String,
    /// Restrict to these coin ids
    pub coin_ids: Vec<String>,
    /// Restrict to a category from `/coins/categories/list`
    pub category: Option<String>,
    pub order: MarketOrder,
    /// 1 to 250; anything else means 100
    pub page_size: u32,
    /// Starts at 1; 0 means 1
    pub page: u32,
    pub sparkline: bool,
    pub price_change_percentage: Vec<PriceChangeWindow>,
}

impl CoinsMarketsParams {
    pub fn new(vs_currency: impl Into<String>) -> Self {
        Self {
            vs_currency: vs_currency.into(),
            ..Self::default()
        }
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Page that will actually be requested
    pub fn effective_page(&self) -> u32 {
        normalize_page(self.page)
    }

    pub fn validate(&self) -> Result<(), ClientError> {
        if self.vs_currency.trim().is_empty() {
            return Err(ClientError::invalid_params("vs_currency is required"));
        }
        Ok(())
    }

    pub fn encode(&self) -> String {
        let mut query = Serializer::new(String::new());
        query.append_pair("vs_currency", &self.vs_currency);
        query.append_pair("order", self.order.as_str());
        if !self.coin_ids.is_empty() {
            query.append_pair("ids", &self.coin_ids.join(","));
        }
        if let Some(category) = &self.category {
            query.append_pair("category", category);
        }
        query.append_pair("per_page", &normalize_page_size(self.page_size).to_string());
        query.append_pair("page", &self.effective_page().to_string());
        if self.sparkline {
            query.append_pair("sparkline", "true");
        }
        if !self.price_change_percentage.is_empty() {
            let windows = self
                .price_change_percentage
                .iter()
                .map(PriceChangeWindow::as_str)
                .collect::<Vec<_>>()
                .join(",");
            query.append_pair("price_change_percentage", &windows);
        }
        query.finish()
    }
}

/// Parameters for `/coins/{id}/tickers`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoinTickersParams {
    /// Required coin id
    pub coin_id: String,
    /// Restrict to these exchanges
    pub exchange_ids: Vec<String>,
    pub include_exchange_logo: bool,
    /// Starts at 1; 0 means 1
    pub page: u32,
    pub order: TickerOrder,
    /// Include 2% order book depth (`cost_to_move_up_usd` / `cost_to_move_down_usd`)
    pub depth: bool,
}

impl CoinTickersParams {
    pub fn new(coin_id: impl Into<String>) -> Self {
        Self {
            coin_id: coin_id.into(),
            ..Self::default()
        }
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Page that will actually be requested
    pub fn effective_page(&self) -> u32 {
        normalize_page(self.page)
    }

    pub fn validate(&self) -> Result<(), ClientError> {
        if self.coin_id.trim().is_empty() {
            return Err(ClientError::invalid_params("coin_id is required"));
        }
        // The id becomes a path segment of /coins/{id}/tickers.
        if self
            .coin_id
            .chars()
            .any(|c| matches!(c, '/' | '?' | '#' | '%') || c.is_whitespace() || c.is_control())
        {
            return Err(ClientError::invalid_params(format!(
                "coin_id must be a single path segment: {:?}",
                self.coin_id
            )));
        }
        Ok(())
    }

    /// Encodes the query string; the coin id goes into the path
    pub fn encode(&self) -> String {
        let mut query = Serializer::new(String::new());
        if !self.exchange_ids.is_empty() {
            query.append_pair("exchange_ids", &self.exchange_ids.join(","));
        }
        query.append_pair("include_exchange_logo", bool_str(self.include_exchange_logo));
        query.append_pair("page", &self.effective_page().to_string());
        query.append_pair("order", self.order.as_str());
        query.append_pair("depth", bool_str(self.depth));
        query.finish()
    }
}

/// Parameters for `/exchanges`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExchangesParams {
    /// 1 to 250; anything else means 100
    pub page_size: u32,
    /// Starts at 1; 0 means 1
    pub page: u32,
}

impl ExchangesParams {
    pub fn new(page_size: u32, page: u32) -> Self {
        Self { page_size, page }
    }

    /// Page that will actually be requested
    pub fn effective_page(&self) -> u32 {
        normalize_page(self.page)
    }

    pub fn encode(&self) -> String {
        Serializer::new(String::new())
            .append_pair("per_page", &normalize_page_size(self.page_size).to_string())
            .append_pair("page", &self.effective_page().to_string())
            .finish()
    }
}
