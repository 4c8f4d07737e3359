//! Types for CoinGecko responses and request options

use crate::metadata::{CacheMetadata, PageMetadata};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Sort order for `/coins/markets`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketOrder {
    #[default]
    MarketCapDesc,
    MarketCapAsc,
    GeckoDesc,
    GeckoAsc,
    VolumeAsc,
    VolumeDesc,
}

impl MarketOrder {
    /// Get the query value for this order
    pub fn as_str(&self) -> &'static str {
        match self {
            MarketOrder::MarketCapDesc => "market_cap_desc",
            MarketOrder::MarketCapAsc => "market_cap_asc",
            MarketOrder::GeckoDesc => "gecko_desc",
            MarketOrder::GeckoAsc => "gecko_asc",
            MarketOrder::VolumeAsc => "volume_asc",
            MarketOrder::VolumeDesc => "volume_desc",
        }
    }
}

/// Windows accepted by `price_change_percentage`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriceChangeWindow {
    #[serde(rename = "1h")]
    OneHour,
    #[serde(rename = "24h")]
    OneDay,
    #[serde(rename = "7d")]
    SevenDays,
    #[serde(rename = "14d")]
    FourteenDays,
    #[serde(rename = "30d")]
    ThirtyDays,
    #[serde(rename = "200d")]
    TwoHundredDays,
    #[serde(rename = "1y")]
    OneYear,
}

impl PriceChangeWindow {
    /// Get the query value for this window
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceChangeWindow::OneHour => "1h",
            PriceChangeWindow::OneDay => "24h",
            PriceChangeWindow::SevenDays => "7d",
            PriceChangeWindow::FourteenDays => "14d",
            PriceChangeWindow::ThirtyDays => "30d",
            PriceChangeWindow::TwoHundredDays => "200d",
            PriceChangeWindow::OneYear => "1y",
        }
    }

    /// Get all windows
    pub fn all() -> &'static [PriceChangeWindow] {
        &[
            PriceChangeWindow::OneHour,
            PriceChangeWindow::OneDay,
            PriceChangeWindow::SevenDays,
            PriceChangeWindow::FourteenDays,
            PriceChangeWindow::ThirtyDays,
            PriceChangeWindow::TwoHundredDays,
            PriceChangeWindow::OneYear,
        ]
    }
}

/// Sort order for ticker endpoints
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TickerOrder {
    #[default]
    TrustScoreDesc,
    TrustScoreAsc,
    VolumeDesc,
}

impl TickerOrder {
    /// Get the query value for this order
    pub fn as_str(&self) -> &'static str {
        match self {
            TickerOrder::TrustScoreDesc => "trust_score_desc",
            TickerOrder::TrustScoreAsc => "trust_score_asc",
            TickerOrder::VolumeDesc => "volume_desc",
        }
    }
}

/// `/simple/price` precision option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Precision {
    /// Full precision as stored by CoinGecko
    Full,
    /// Fixed number of decimals, 0 to 18
    Decimals(u8),
}

impl Precision {
    /// Get the query value for this precision
    pub fn to_query_value(&self) -> String {
        match self {
            Precision::Full => "full".to_string(),
            Precision::Decimals(decimals) => decimals.to_string(),
        }
    }
}

/// `/ping` response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ping {
    pub gecko_says: String,
}

/// Entry of `/coins/list`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinsListItem {
    pub id: String,
    pub symbol: String,
    pub name: String,
}

/// `/coins/list` response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinsList {
    pub cache: CacheMetadata,
    pub entries: Vec<CoinsListItem>,
}

/// Return on investment since launch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roi {
    pub times: f64,
    pub currency: String,
    pub percentage: f64,
}

/// 7 day price sparkline
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sparkline {
    #[serde(default)]
    pub price: Vec<f64>,
}

/// Entry of `/coins/markets`
///
/// Most numeric fields are null for freshly listed coins, hence the options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinsMarketItem {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub image: Option<String>,
    pub current_price: Option<f64>,
    pub market_cap: Option<f64>,
    pub market_cap_rank: Option<u32>,
    pub fully_diluted_valuation: Option<f64>,
    pub total_volume: Option<f64>,
    pub high_24h: Option<f64>,
    pub low_24h: Option<f64>,
    pub price_change_24h: Option<f64>,
    pub price_change_percentage_24h: Option<f64>,
    pub market_cap_change_24h: Option<f64>,
    pub market_cap_change_percentage_24h: Option<f64>,
    pub circulating_supply: Option<f64>,
    pub total_supply: Option<f64>,
    pub max_supply: Option<f64>,
    pub ath: Option<f64>,
    pub ath_change_percentage: Option<f64>,
    pub ath_date: Option<DateTime<Utc>>,
    pub atl: Option<f64>,
    pub atl_change_percentage: Option<f64>,
    pub atl_date: Option<DateTime<Utc>>,
    pub roi: Option<Roi>,
    pub last_updated: Option<DateTime<Utc>>,
    pub sparkline_in_7d: Option<Sparkline>,
    pub price_change_percentage_1h_in_currency: Option<f64>,
    pub price_change_percentage_24h_in_currency: Option<f64>,
    pub price_change_percentage_7d_in_currency: Option<f64>,
    pub price_change_percentage_14d_in_currency: Option<f64>,
    pub price_change_percentage_30d_in_currency: Option<f64>,
    pub price_change_percentage_200d_in_currency: Option<f64>,
    pub price_change_percentage_1y_in_currency: Option<f64>,
}

/// One page of `/coins/markets`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinsMarkets {
    pub page: PageMetadata,
    pub entries: Vec<CoinsMarketItem>,
}

/// Market (exchange) a ticker trades on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickerMarket {
    pub name: String,
    pub identifier: String,
    #[serde(default)]
    pub has_trading_incentive: bool,
}

/// Trading pair on an exchange
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickerItem {
    pub base: String,
    pub target: String,
    pub market: TickerMarket,
    pub last: Option<f64>,
    pub volume: Option<f64>,
    pub cost_to_move_up_usd: Option<f64>,
    pub cost_to_move_down_usd: Option<f64>,
    #[serde(default)]
    pub converted_last: HashMap<String, f64>,
    #[serde(default)]
    pub converted_volume: HashMap<String, f64>,
    pub trust_score: Option<String>,
    pub bid_ask_spread_percentage: Option<f64>,
    pub timestamp: Option<DateTime<Utc>>,
    pub last_traded_at: Option<DateTime<Utc>>,
    pub last_fetch_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_anomaly: bool,
    #[serde(default)]
    pub is_stale: bool,
    pub trade_url: Option<String>,
    pub coin_id: Option<String>,
    pub target_coin_id: Option<String>,
}

/// One page of `/coins/{id}/tickers`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinTickers {
    pub page: PageMetadata,
    pub name: String,
    pub tickers: Vec<TickerItem>,
}

/// Entry of `/exchanges`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exchange {
    pub id: String,
    pub name: String,
    pub year_established: Option<u32>,
    pub country: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub url: String,
    pub image: Option<String>,
    pub has_trading_incentive: Option<bool>,
    pub trust_score: Option<u32>,
    pub trust_score_rank: Option<u32>,
    #[serde(default)]
    pub trade_volume_24h_btc: f64,
    #[serde(default)]
    pub trade_volume_24h_btc_normalized: f64,
}

/// One page of `/exchanges`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exchanges {
    pub page: PageMetadata,
    pub entries: Vec<Exchange>,
}

impl Exchanges {
    /// Gets an exchange by id
    pub fn get(&self, id: &str) -> Option<&Exchange> {
        self.entries.iter().find(|exchange| exchange.id == id)
    }
}

/// Entry of `/exchange_rates`, relative to BTC
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRate {
    pub name: String,
    pub unit: String,
    pub value: f64,
    #[serde(rename = "type")]
    pub kind: String,
}

/// `/global` market overview
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Global {
    pub active_cryptocurrencies: u64,
    pub upcoming_icos: u64,
    pub ongoing_icos: u64,
    pub ended_icos: u64,
    pub markets: u64,
    pub total_market_cap: HashMap<String, f64>,
    pub total_volume: HashMap<String, f64>,
    pub market_cap_percentage: HashMap<String, f64>,
    pub market_cap_change_percentage_24h_usd: f64,
    pub updated_at: i64,
}

impl Global {
    /// Get `updated_at` as a timestamp
    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.updated_at, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_values() {
        assert_eq!(MarketOrder::default().as_str(), "market_cap_desc");
        assert_eq!(TickerOrder::default().as_str(), "trust_score_desc");
        assert_eq!(PriceChangeWindow::TwoHundredDays.as_str(), "200d");
        assert_eq!(PriceChangeWindow::all().len(), 7);
        assert_eq!(Precision::Full.to_query_value(), "full");
        assert_eq!(Precision::Decimals(4).to_query_value(), "4");
    }

    #[test]
    fn test_market_item_tolerates_nulls() {
        let item: CoinsMarketItem = serde_json::from_str(
            r#"{
                "id": "new-coin",
                "symbol": "new",
                "name": "New Coin",
                "current_price": null,
                "market_cap_rank": null,
                "roi": null,
                "last_updated": "2023-01-11T12:00:00.000Z"
            }"#,
        )
        .unwrap();

        assert_eq!(item.current_price, None);
        assert_eq!(item.market_cap_rank, None);
        assert!(item.last_updated.is_some());
    }

    #[test]
    fn test_exchange_rate_type_field() {
        let rate: ExchangeRate = serde_json::from_str(
            r#"{"name": "US Dollar", "unit": "$", "value": 17432.5, "type": "fiat"}"#,
        )
        .unwrap();
        assert_eq!(rate.kind, "fiat");
    }
}
