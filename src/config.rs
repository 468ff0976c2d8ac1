//! Client configuration

use crate::constants::{GRAPH_API_URL, REQUEST_TIMEOUT_SECS, TICKER_API_URL, USER_AGENT};
use std::time::Duration;

/// Endpoints and HTTP settings for a `CoinMarketCapClient`
///
/// `Default` uses the public CoinMarketCap hosts from `constants`.
///
/// ```
/// use coinmarketcap_sdk::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::default()
///     .with_ticker_base_url("http://localhost:8080/v1/")
///     .with_timeout(Duration::from_secs(3));
///
/// assert_eq!(config.ticker_base_url(), "http://localhost:8080/v1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    ticker_base_url: String,
    graph_base_url: String,
    timeout: Duration,
    user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            ticker_base_url: TICKER_API_URL.to_string(),
            graph_base_url: GRAPH_API_URL.to_string(),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    /// Overrides the base URL used for `/global/` and `/ticker/`
    pub fn with_ticker_base_url(mut self, url: impl Into<String>) -> Self {
        self.ticker_base_url = trim_base(url.into());
        self
    }

    /// Overrides the base URL used for graph requests
    pub fn with_graph_base_url(mut self, url: impl Into<String>) -> Self {
        self.graph_base_url = trim_base(url.into());
        self
    }

    /// Sets the request timeout applied by the default transport
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the user agent sent by the default transport
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn ticker_base_url(&self) -> &str {
        &self.ticker_base_url
    }

    pub fn graph_base_url(&self) -> &str {
        &self.graph_base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

fn trim_base(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}
