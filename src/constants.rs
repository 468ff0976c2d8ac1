//! Default endpoints and HTTP settings for the CoinMarketCap client
//!
//! These are the values `ClientConfig::default()` starts from. Callers that
//! need different hosts or timeouts override them on the config instead.

/// Base URL for the ticker and global endpoints
pub const TICKER_API_URL: &str = "https://api.coinmarketcap.com/v1";

/// Base URL for historical graph data
pub const GRAPH_API_URL: &str = "https://graphs.coinmarketcap.com/currencies";

/// Global market data endpoint, relative to `TICKER_API_URL`
pub const GLOBAL_ENDPOINT: &str = "/global/";

/// Ticker endpoint, relative to `TICKER_API_URL`
pub const TICKER_ENDPOINT: &str = "/ticker/";

/// HTTP request timeout (in seconds)
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// User agent for HTTP requests
pub const USER_AGENT: &str = "coinmarketcap-sdk/0.1.0";

/// The only status code treated as success
pub const HTTP_OK: u16 = 200;
