use gecko_sdk::{ClientConfig, CoinsMarketsParams, GeckoClient, PriceChangeWindow};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = GeckoClient::new(ClientConfig::from_env())?;

    // 1. A single page and its headers
    println!("1. First page of /coins/markets (10 per page)...");
    let params = CoinsMarketsParams::new("usd").with_page_size(10);
    let first = client.coins_markets(&params).await?;

    for (rank, coin) in first.entries.iter().enumerate() {
        println!(
            "   {:>2}. {:<12} {:>14.2}",
            rank + 1,
            coin.symbol.to_uppercase(),
            coin.current_price.unwrap_or_default()
        );
    }
    println!("   Per-Page: {}", first.page.page_size);
    println!("   Total:    {}", first.page.total_count);
    println!("   Next:     {:?}", first.page.next_page());
    println!("   Last:     {:?}", first.page.last_page());
    println!();

    // 2. Follow the next page until three pages are collected
    println!("2. Following pagination for 3 pages...");
    let mut params = CoinsMarketsParams::new("usd").with_page_size(50);
    params.price_change_percentage = vec![PriceChangeWindow::OneHour, PriceChangeWindow::SevenDays];

    let start = Instant::now();
    let entries = client.coins_markets_all(&params, 3).await?;
    println!("   Collected {} coins in {:?}", entries.len(), start.elapsed());

    if let Some(best) = entries
        .iter()
        .filter_map(|coin| coin.price_change_percentage_7d_in_currency.map(|change| (coin, change)))
        .max_by(|a, b| a.1.total_cmp(&b.1))
    {
        println!("   Best 7d performer: {} ({:+.2}%)", best.0.name, best.1);
    }

    Ok(())
}
