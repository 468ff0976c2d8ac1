use coinmarketcap_sdk::CoinMarketCapClient;
use std::time::Instant;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = CoinMarketCapClient::new()?;

    println!("CoinMarketCap snapshot");
    println!("-------------------------------------------");

    // 1. Global figures
    let start = Instant::now();
    match client.global_market_data().await {
        Ok(global) => {
            println!("1. Global market");
            println!("   Market cap:    ${:.0}", global.total_market_cap_usd);
            println!("   24h volume:    ${:.0}", global.total_24h_volume_usd);
            println!("   BTC dominance: {:.2}%", global.bitcoin_percentage_of_market_cap);
            println!("   Markets:       {}", global.active_markets);
            println!("   Latency:       {:?}", start.elapsed());
        }
        Err(e) => eprintln!("   Error: could not fetch global data: {}", e),
    }
    println!();

    // 2. Single coin
    match client.coin("bitcoin").await {
        Ok(coin) => {
            println!("2. {} ({}) rank {}", coin.name, coin.symbol, coin.rank);
            println!("   Price:   {:?} USD", coin.price_usd);
            println!("   24h:     {:?}%", coin.percent_change_24h);
            println!("   Updated: {:?}", coin.last_updated_at());
        }
        Err(e) => eprintln!("   Error: could not fetch bitcoin: {}", e),
    }
    println!();

    // 3. Top 10, by symbol
    match client.all_coins(Some(10)).await {
        Ok(index) => {
            println!("3. Top {} coins", index.len());
            let mut coins: Vec<_> = index.by_symbol().values().collect();
            coins.sort_by_key(|c| c.rank);
            for coin in coins {
                println!("   #{:<3} {:<6} {:?}", coin.rank, coin.symbol, coin.price_usd);
            }
        }
        Err(e) => eprintln!("   Error: could not fetch listing: {}", e),
    }
    println!();

    // 4. Last 24 hours of bitcoin prices
    let now = chrono::Utc::now().timestamp();
    match client.coin_graph("bitcoin", now - 86_400, now).await {
        Ok(graph) => {
            println!("4. Bitcoin graph: {} price samples", graph.price_usd.len());
            if let (Some(first), Some(last)) = (graph.price_usd.first(), graph.price_usd.last()) {
                println!("   From ${:.2} to ${:.2}", first.value(), last.value());
            }
        }
        Err(e) => eprintln!("   Error: could not fetch graph: {}", e),
    }

    Ok(())
}
