//! Decoding of `/simple/price` payloads
//!
//! The API flattens each currency's quote into suffixed keys instead of a
//! nested object:
//!
//! ```text
//! {"usd": 18109.98, "usd_market_cap": 348916085115.57, "usd_24h_vol": 33339997882.46,
//!  "usd_24h_change": 3.886, "last_updated_at": 1673513817}
//! ```
//!
//! Decoding is fail-fast: the first value that does not parse aborts the
//! whole object and no partial record is returned.

use crate::{error::PriceParseError, metadata::CacheMetadata};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

const LAST_UPDATED_AT: &str = "last_updated_at";

/// Optional attributes encoded as `<currency><suffix>` keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuoteField {
    MarketCap,
    Volume24h,
    Change24h,
}

impl QuoteField {
    const ALL: [QuoteField; 3] = [
        QuoteField::MarketCap,
        QuoteField::Volume24h,
        QuoteField::Change24h,
    ];

    fn suffix(self) -> &'static str {
        match self {
            QuoteField::MarketCap => "_market_cap",
            QuoteField::Volume24h => "_24h_vol",
            QuoteField::Change24h => "_24h_change",
        }
    }

    /// Splits `usd_24h_vol` into `("usd", Volume24h)`
    ///
    /// Keys without a recognized suffix, or with nothing before it, are not
    /// compound keys.
    fn split(key: &str) -> Option<(&str, QuoteField)> {
        Self::ALL.iter().find_map(|field| {
            key.strip_suffix(field.suffix())
                .filter(|currency| !currency.is_empty())
                .map(|currency| (currency, *field))
        })
    }
}

/// One currency's quote for a coin
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrencyQuote {
    /// Price in this currency; 0 if the payload only carried suffixed keys
    pub price: f64,
    pub market_cap: Option<f64>,
    pub volume_24h: Option<f64>,
    pub change_percentage_24h: Option<f64>,
}

impl CurrencyQuote {
    fn set(&mut self, field: QuoteField, value: f64) {
        match field {
            QuoteField::MarketCap => self.market_cap = Some(value),
            QuoteField::Volume24h => self.volume_24h = Some(value),
            QuoteField::Change24h => self.change_percentage_24h = Some(value),
        }
    }
}

/// All quotes for a single coin
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    /// Currency code (e.g. `usd`) to quote
    pub currencies: HashMap<String, CurrencyQuote>,

    /// When CoinGecko last refreshed this coin, if requested
    pub last_updated_at: Option<DateTime<Utc>>,
}

impl PriceRecord {
    /// Gets the quote for a currency code
    pub fn quote(&self, currency: &str) -> Option<&CurrencyQuote> {
        self.currencies.get(currency)
    }

    /// Gets the price in a currency
    pub fn price(&self, currency: &str) -> Option<f64> {
        self.quote(currency).map(|quote| quote.price)
    }
}

/// Decoded `/simple/price` response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimplePrice {
    pub cache: CacheMetadata,

    /// Coin id (e.g. `bitcoin`) to its quotes
    pub coins: HashMap<String, PriceRecord>,
}

impl SimplePrice {
    /// Gets the record for a coin id
    pub fn coin(&self, coin_id: &str) -> Option<&PriceRecord> {
        self.coins.get(coin_id)
    }

    /// Gets a coin's price in a currency
    pub fn price(&self, coin_id: &str, currency: &str) -> Option<f64> {
        self.coin(coin_id).and_then(|record| record.price(currency))
    }
}

/// Decodes one coin's compound-key price object
///
/// # Arguments
/// * `coin_id` - Coin the object belongs to; used in error messages
/// * `raw` - The flat object, keys in any order
///
/// # Returns
/// The record, or the first field that failed to parse
pub fn parse_price_object(
    coin_id: &str,
    raw: &Map<String, Value>,
) -> Result<PriceRecord, PriceParseError> {
    let mut currencies: HashMap<String, CurrencyQuote> = HashMap::new();
    let mut last_updated_at = None;

    for (key, value) in raw {
        if key == LAST_UPDATED_AT {
            let timestamp = parse_timestamp(value)
                .ok_or_else(|| PriceParseError::invalid_timestamp(coin_id, value))?;
            last_updated_at = Some(timestamp);
            continue;
        }

        let number =
            parse_number(value).ok_or_else(|| PriceParseError::invalid_number(coin_id, key, value))?;

        match QuoteField::split(key) {
            Some((currency, field)) => currencies
                .entry(currency.to_string())
                .or_default()
                .set(field, number),
            None => currencies.entry(key.clone()).or_default().price = number,
        }
    }

    Ok(PriceRecord {
        currencies,
        last_updated_at,
    })
}

/// Decodes a whole `/simple/price` body: coin id to price object
pub fn parse_simple_price(body: &[u8]) -> Result<HashMap<String, PriceRecord>, PriceParseError> {
    let root: Map<String, Value> = serde_json::from_slice(body)?;

    root.iter()
        .map(|(coin_id, value)| {
            let object = value
                .as_object()
                .ok_or_else(|| PriceParseError::NotAnObject {
                    coin_id: coin_id.clone(),
                })?;
            Ok::<_, PriceParseError>((coin_id.clone(), parse_price_object(coin_id, object)?))
        })
        .collect()
}

/// A JSON number, or a string holding one
fn parse_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|number| number.is_finite()),
        _ => None,
    }
}

/// Integer Unix seconds, as a JSON integer or a string holding one
fn parse_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    let secs = match value {
        Value::Number(number) => number.as_i64()?,
        Value::String(text) => text.trim().parse::<i64>().ok()?,
        _ => return None,
    };

    DateTime::from_timestamp(secs, 0)
}
