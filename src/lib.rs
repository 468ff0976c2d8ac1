//! # CoinMarketCap SDK
//!
//! Typed async client for the public CoinMarketCap v1 API: the global market
//! snapshot, single-coin and bulk tickers, and historical graph data.
//!
//! ## Usage
//!
//! ```no_run
//! use coinmarketcap_sdk::CoinMarketCapClient;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = CoinMarketCapClient::new()?;
//!
//! // Aggregate market figures
//! let global = client.global_market_data().await?;
//! println!("BTC dominance: {:.2}%", global.bitcoin_percentage_of_market_cap);
//!
//! // Top 100 coins, looked up by symbol or by name
//! let coins = client.all_coins(Some(100)).await?;
//! if let Some(eth) = coins.get_by_name("Ethereum") {
//!     println!("{}: {:?}", eth.symbol, eth.price_usd);
//! }
//!
//! // One week of price history (unix seconds)
//! let graph = client.coin_graph("bitcoin", 1_509_300_000, 1_509_904_800).await?;
//! println!("{} price samples", graph.price_usd.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Every call makes a single request. Failures come back as `ClientError`:
//!
//! ```no_run
//! use coinmarketcap_sdk::{ClientError, CoinMarketCapClient};
//!
//! # async fn example(client: CoinMarketCapClient) {
//! match client.coin("bitcoin").await {
//!     Ok(coin) => println!("{}: {:?}", coin.name, coin.price_usd),
//!     Err(ClientError::NotFound { coin_id }) => println!("No ticker for {}", coin_id),
//!     Err(e) if e.is_transport() => eprintln!("Request failed: {}", e),
//!     Err(e) => eprintln!("Unexpected response: {}", e),
//! }
//! # }
//! ```
//!
//! Retries, rate limiting and caching are left to the caller.

pub mod client;
pub mod config;
pub mod constants;
mod de;
pub mod error;
pub mod index;
pub mod transport;
pub mod types;

// Re-export commonly used types
pub use client::CoinMarketCapClient;
pub use config::ClientConfig;
pub use error::{ClientError, Result, TransportError};
pub use index::{CoinIndex, CoinMap};
pub use transport::{HttpResponse, HttpTransport, ReqwestTransport};
pub use types::{Coin, CoinGraph, GlobalMarketData, GraphPoint};
