//! Types returned by the CoinMarketCap client

use crate::de::{from_str_or_number, opt_from_str_or_number};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Ticker snapshot for a single cryptocurrency
///
/// The upstream sends every figure as a string and leaves unknown ones as
/// `null`; those become `None` here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    /// Upstream identifier (slug), e.g. `bitcoin`
    pub id: String,

    /// Display name, e.g. `Bitcoin`
    pub name: String,

    /// Ticker symbol, e.g. `BTC`. Can be empty for broken upstream records.
    pub symbol: String,

    /// Position by market cap, starting at 1
    #[serde(deserialize_with = "from_str_or_number")]
    pub rank: u32,

    /// Price in USD
    #[serde(default, deserialize_with = "opt_from_str_or_number")]
    pub price_usd: Option<f64>,

    /// Price in BTC
    #[serde(default, deserialize_with = "opt_from_str_or_number")]
    pub price_btc: Option<f64>,

    /// Trading volume over the last 24 hours, in USD
    #[serde(
        rename = "24h_volume_usd",
        default,
        deserialize_with = "opt_from_str_or_number"
    )]
    pub volume_usd_24h: Option<f64>,

    /// Market capitalization in USD
    #[serde(default, deserialize_with = "opt_from_str_or_number")]
    pub market_cap_usd: Option<f64>,

    #[serde(default, deserialize_with = "opt_from_str_or_number")]
    pub available_supply: Option<f64>,

    #[serde(default, deserialize_with = "opt_from_str_or_number")]
    pub total_supply: Option<f64>,

    /// Hard cap on supply; `None` for uncapped coins
    #[serde(default, deserialize_with = "opt_from_str_or_number")]
    pub max_supply: Option<f64>,

    #[serde(default, deserialize_with = "opt_from_str_or_number")]
    pub percent_change_1h: Option<f64>,

    #[serde(default, deserialize_with = "opt_from_str_or_number")]
    pub percent_change_24h: Option<f64>,

    #[serde(default, deserialize_with = "opt_from_str_or_number")]
    pub percent_change_7d: Option<f64>,

    /// Unix timestamp (seconds) of the upstream's last update
    #[serde(default, deserialize_with = "opt_from_str_or_number")]
    pub last_updated: Option<i64>,
}

impl Coin {
    /// Last update time as a UTC datetime
    pub fn last_updated_at(&self) -> Option<DateTime<Utc>> {
        self.last_updated
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
    }
}

/// Aggregate figures across every tracked currency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalMarketData {
    /// Total market capitalization in USD
    #[serde(deserialize_with = "from_str_or_number")]
    pub total_market_cap_usd: f64,

    /// Total 24h trading volume in USD
    #[serde(deserialize_with = "from_str_or_number")]
    pub total_24h_volume_usd: f64,

    /// Bitcoin dominance, as a percentage of total market cap
    #[serde(deserialize_with = "from_str_or_number")]
    pub bitcoin_percentage_of_market_cap: f64,

    #[serde(deserialize_with = "from_str_or_number")]
    pub active_currencies: u64,

    #[serde(default, deserialize_with = "opt_from_str_or_number")]
    pub active_assets: Option<u64>,

    #[serde(deserialize_with = "from_str_or_number")]
    pub active_markets: u64,

    /// Unix timestamp (seconds)
    #[serde(default, deserialize_with = "opt_from_str_or_number")]
    pub last_updated: Option<i64>,
}

impl GlobalMarketData {
    /// Last update time as a UTC datetime
    pub fn last_updated_at(&self) -> Option<DateTime<Utc>> {
        self.last_updated
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
    }
}

/// One `[timestamp_ms, value]` sample of a graph series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GraphPoint(pub i64, pub f64);

impl GraphPoint {
    /// Sample time in unix milliseconds
    pub fn timestamp_ms(&self) -> i64 {
        self.0
    }

    pub fn value(&self) -> f64 {
        self.1
    }

    /// Sample time as a UTC datetime
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.0)
    }
}

/// Historical series for one coin, oldest sample first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoinGraph {
    #[serde(default)]
    pub market_cap_by_available_supply: Vec<GraphPoint>,

    #[serde(default)]
    pub price_btc: Vec<GraphPoint>,

    #[serde(default)]
    pub price_usd: Vec<GraphPoint>,

    #[serde(default)]
    pub volume_usd: Vec<GraphPoint>,
}

impl CoinGraph {
    /// True when every series is empty
    pub fn is_empty(&self) -> bool {
        self.market_cap_by_available_supply.is_empty()
            && self.price_btc.is_empty()
            && self.price_usd.is_empty()
            && self.volume_usd.is_empty()
    }

    /// First and last timestamps (ms) of the USD price series
    pub fn time_range(&self) -> Option<(i64, i64)> {
        let first = self.price_usd.first()?;
        let last = self.price_usd.last()?;
        Some((first.timestamp_ms(), last.timestamp_ms()))
    }
}
