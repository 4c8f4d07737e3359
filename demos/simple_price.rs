use gecko_sdk::{ClientConfig, GeckoClient, Precision, SimplePriceParams};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG=gecko_sdk=debug shows the requested URLs
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // COINGECKO_API_KEY switches to the pro API
    let config = ClientConfig::from_env();
    let client = GeckoClient::new(config)?;

    println!("Fetching simple prices ({})...", client.config().base_url);
    println!("-------------------------------------------");

    let params = SimplePriceParams::new(["bitcoin", "ethereum", "solana"], ["usd", "eur"])
        .with_all_fields()
        .with_precision(Precision::Decimals(2));
    let prices = client.simple_price(&params).await?;

    let mut coin_ids: Vec<&String> = prices.coins.keys().collect();
    coin_ids.sort();

    for coin_id in coin_ids {
        let Some(record) = prices.coin(coin_id) else {
            continue;
        };
        println!("{}:", coin_id);

        let mut currencies: Vec<&String> = record.currencies.keys().collect();
        currencies.sort();
        for currency in currencies {
            if let Some(quote) = record.quote(currency) {
                println!("   {:>4}  price: {:.2}", currency, quote.price);
                if let Some(market_cap) = quote.market_cap {
                    println!("         market cap: {:.0}", market_cap);
                }
                if let Some(change) = quote.change_percentage_24h {
                    println!("         24h change: {:+.2}%", change);
                }
            }
        }
        if let Some(updated) = record.last_updated_at {
            println!("   last updated: {}", updated);
        }
    }
    println!();

    match prices.cache.ttl() {
        Some(ttl) => println!("Cache max-age: {:?}", ttl),
        None => println!("Cache max-age: not sent"),
    }
    match prices.cache.expires() {
        Some(expires) => println!("Expires:       {}", expires),
        None => println!("Expires:       not sent"),
    }

    Ok(())
}
