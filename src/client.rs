//! CoinMarketCap API client

use crate::{
    config::ClientConfig,
    constants::{GLOBAL_ENDPOINT, HTTP_OK, TICKER_ENDPOINT},
    error::{ClientError, Result, TransportError},
    index::CoinIndex,
    transport::{HttpTransport, ReqwestTransport},
    types::{Coin, CoinGraph, GlobalMarketData},
};
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Client for the CoinMarketCap v1 ticker, global and graph endpoints
///
/// Every call issues exactly one GET and keeps nothing afterwards. The client
/// is cheap to clone; clones share the underlying transport.
///
/// # Example
/// ```no_run
/// use coinmarketcap_sdk::CoinMarketCapClient;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = CoinMarketCapClient::new()?;
///
/// let global = client.global_market_data().await?;
/// println!("Total market cap: ${:.0}", global.total_market_cap_usd);
///
/// let btc = client.coin("bitcoin").await?;
/// println!("{}: {:?}", btc.symbol, btc.price_usd);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct CoinMarketCapClient {
    transport: Arc<dyn HttpTransport>,
    config: ClientConfig,
}

impl std::fmt::Debug for CoinMarketCapClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoinMarketCapClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl CoinMarketCapClient {
    /// Creates a client for the public endpoints with default HTTP settings
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Creates a client using the reqwest transport configured from `config`
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(&config)?;
        Ok(Self::with_transport(Arc::new(transport), config))
    }

    /// Creates a client on top of a caller-supplied transport
    ///
    /// The timeout and user agent in `config` are not applied here; they are
    /// the transport's concern.
    pub fn with_transport(transport: Arc<dyn HttpTransport>, config: ClientConfig) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn global_url(&self) -> String {
        format!("{}{}", self.config.ticker_base_url(), GLOBAL_ENDPOINT)
    }

    fn ticker_url(&self, coin_id: &str) -> String {
        format!("{}{}{}", self.config.ticker_base_url(), TICKER_ENDPOINT, coin_id)
    }

    /// Builds the listing URL; negative limits mean "no limit"
    fn all_coins_url(&self, limit: Option<i64>) -> String {
        let base = format!("{}{}", self.config.ticker_base_url(), TICKER_ENDPOINT);
        match limit {
            Some(n) if n >= 0 => format!("{}?limit={}", base, n),
            _ => base,
        }
    }

    /// Builds the graph URL; the graph service expects milliseconds
    fn graph_url(&self, coin_id: &str, start: i64, end: i64) -> String {
        format!(
            "{}/{}/{}/{}",
            self.config.graph_base_url(),
            coin_id,
            start.saturating_mul(1000),
            end.saturating_mul(1000)
        )
    }

    /// Issues a GET and decodes a 200 response body as JSON
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        tracing::debug!(url = %url, "Requesting CoinMarketCap");

        let response = self.transport.get(url).await?;

        if response.status != HTTP_OK {
            tracing::debug!(url = %url, status = response.status, "Non-200 response");
            return Err(TransportError::Status {
                status: response.status,
                body: response.body,
            }
            .into());
        }

        tracing::trace!(url = %url, body_len = response.body.len(), "Received response body");

        Ok(serde_json::from_str(&response.body)?)
    }

    /// Fetches aggregate figures for the whole market
    ///
    /// # Returns
    /// The global snapshot, or a transport or decode error
    pub async fn global_market_data(&self) -> Result<GlobalMarketData> {
        self.get_json(&self.global_url()).await
    }

    /// Fetches the ticker for one coin
    ///
    /// # Arguments
    /// * `coin_id` - Upstream identifier such as `bitcoin`; passed through
    ///   unchecked
    ///
    /// # Returns
    /// The coin, or `ClientError::NotFound` if the upstream answered with an
    /// empty list
    pub async fn coin(&self, coin_id: &str) -> Result<Coin> {
        let coins: Vec<Coin> = self.get_json(&self.ticker_url(coin_id)).await?;

        coins
            .into_iter()
            .next()
            .ok_or_else(|| ClientError::not_found(coin_id))
    }

    /// Fetches the ticker listing and indexes it by symbol and by name
    ///
    /// # Arguments
    /// * `limit` - Maximum number of coins to request. `None` or a negative
    ///   value requests the full listing; zero is sent as `limit=0`.
    ///
    /// # Returns
    /// A `CoinIndex` over every coin with a non-empty symbol
    pub async fn all_coins(&self, limit: Option<i64>) -> Result<CoinIndex> {
        let coins: Vec<Coin> = self.get_json(&self.all_coins_url(limit)).await?;
        let received = coins.len();

        let index = CoinIndex::from_coins(coins);

        tracing::debug!(
            received = received,
            indexed = index.len(),
            "Indexed ticker listing"
        );

        Ok(index)
    }

    /// Fetches historical graph data for a coin
    ///
    /// # Arguments
    /// * `coin_id` - Upstream identifier such as `bitcoin`
    /// * `start` - Window start, unix seconds
    /// * `end` - Window end, unix seconds. Not checked against `start`.
    pub async fn coin_graph(&self, coin_id: &str, start: i64, end: i64) -> Result<CoinGraph> {
        let graph: CoinGraph = self.get_json(&self.graph_url(coin_id, start, end)).await?;

        tracing::debug!(
            coin_id = %coin_id,
            points = graph.price_usd.len(),
            "Fetched coin graph"
        );

        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::mock::MockTransport;

    const TICKER: &str = "http://mock/v1";
    const GRAPHS: &str = "http://graphs.mock/currencies";

    fn client_with(transport: Arc<MockTransport>) -> CoinMarketCapClient {
        let config = ClientConfig::default()
            .with_ticker_base_url(TICKER)
            .with_graph_base_url(GRAPHS);
        CoinMarketCapClient::with_transport(transport, config)
    }

    fn ticker_json(id: &str, name: &str, symbol: &str, rank: u32) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "name": name,
            "symbol": symbol,
            "rank": rank.to_string(),
            "price_usd": "1.5",
            "price_btc": "0.0001",
            "24h_volume_usd": "1000.0",
            "market_cap_usd": "50000.0",
            "available_supply": "100.0",
            "total_supply": "100.0",
            "max_supply": null,
            "percent_change_1h": "0.1",
            "percent_change_24h": "-1.2",
            "percent_change_7d": "3.4",
            "last_updated": "1509909269"
        })
    }

    #[tokio::test]
    async fn test_global_market_data() {
        let transport = Arc::new(MockTransport::new());
        transport.set_response(
            "http://mock/v1/global/",
            200,
            r#"{
                "total_market_cap_usd": 201241796675,
                "total_24h_volume_usd": 4548680009,
                "bitcoin_percentage_of_market_cap": 62.54,
                "active_currencies": 896,
                "active_assets": 360,
                "active_markets": 6439,
                "last_updated": 1509909269
            }"#,
        );

        let data = client_with(transport.clone())
            .global_market_data()
            .await
            .unwrap();

        assert_eq!(data.total_market_cap_usd, 201241796675.0);
        assert_eq!(data.bitcoin_percentage_of_market_cap, 62.54);
        assert_eq!(data.active_markets, 6439);
        assert_eq!(transport.requests(), vec!["http://mock/v1/global/"]);
    }

    #[tokio::test]
    async fn test_coin_returns_first_element() {
        let transport = Arc::new(MockTransport::new());
        let body = serde_json::json!([ticker_json("bitcoin", "Bitcoin", "BTC", 1)]);
        transport.set_response("http://mock/v1/ticker/bitcoin", 200, &body.to_string());

        let coin = client_with(transport.clone()).coin("bitcoin").await.unwrap();

        assert_eq!(coin.id, "bitcoin");
        assert_eq!(coin.rank, 1);
        assert_eq!(coin.price_usd, Some(1.5));
        assert_eq!(coin.max_supply, None);
        assert_eq!(transport.requests(), vec!["http://mock/v1/ticker/bitcoin"]);
    }

    #[tokio::test]
    async fn test_coin_empty_list_is_not_found() {
        let transport = Arc::new(MockTransport::new());
        transport.set_response("http://mock/v1/ticker/nothing", 200, "[]");

        let err = client_with(transport).coin("nothing").await.unwrap_err();

        assert!(err.is_not_found());
        assert!(matches!(err, ClientError::NotFound { ref coin_id } if coin_id == "nothing"));
    }

    #[tokio::test]
    async fn test_non_200_body_becomes_transport_message() {
        let transport = Arc::new(MockTransport::new());
        transport.set_response("http://mock/v1/ticker/bitcoin", 404, "rate limited");

        let err = client_with(transport).coin("bitcoin").await.unwrap_err();

        assert!(err.is_transport());
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.to_string(), "rate limited");
    }

    #[tokio::test]
    async fn test_only_200_counts_as_success() {
        let transport = Arc::new(MockTransport::new());
        transport.set_response("http://mock/v1/global/", 204, "");

        let err = client_with(transport)
            .global_market_data()
            .await
            .unwrap_err();

        assert!(err.is_transport());
        assert_eq!(err.status(), Some(204));
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let transport = Arc::new(MockTransport::new());
        transport.set_response("http://mock/v1/global/", 200, "<html>oops</html>");
        transport.set_response("http://mock/v1/ticker/bitcoin", 200, r#"{"id": "bitcoin"}"#);

        let client = client_with(transport);

        assert!(client.global_market_data().await.unwrap_err().is_decode());
        // An object where an array is expected is a shape mismatch
        assert!(client.coin("bitcoin").await.unwrap_err().is_decode());
    }

    #[tokio::test]
    async fn test_transport_failure_is_surfaced() {
        let transport = Arc::new(MockTransport::new());
        let cause = reqwest::Client::new().get("not a url").build().unwrap_err();
        transport.set_error("http://mock/v1/global/", TransportError::InvalidUrl(cause));

        let err = client_with(transport.clone())
            .global_market_data()
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ClientError::Transport(TransportError::InvalidUrl(_))
        ));
        assert!(std::error::Error::source(&err).is_some());
        // Single attempt, no retry
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_all_coins_limit_handling() {
        let transport = Arc::new(MockTransport::new());
        transport.set_response("http://mock/v1/ticker/", 200, "[]");
        transport.set_response("http://mock/v1/ticker/?limit=0", 200, "[]");
        transport.set_response("http://mock/v1/ticker/?limit=25", 200, "[]");

        let client = client_with(transport.clone());
        client.all_coins(None).await.unwrap();
        client.all_coins(Some(-1)).await.unwrap();
        client.all_coins(Some(0)).await.unwrap();
        client.all_coins(Some(25)).await.unwrap();

        assert_eq!(
            transport.requests(),
            vec![
                "http://mock/v1/ticker/",
                "http://mock/v1/ticker/",
                "http://mock/v1/ticker/?limit=0",
                "http://mock/v1/ticker/?limit=25",
            ]
        );
    }

    #[tokio::test]
    async fn test_all_coins_builds_both_indexes() {
        let transport = Arc::new(MockTransport::new());
        let body = serde_json::json!([
            ticker_json("bitcoin", "Bitcoin", "BTC", 1),
            ticker_json("broken", "Broken", "", 2),
            ticker_json("ethereum", "Ethereum", "ETH", 3),
        ]);
        transport.set_response("http://mock/v1/ticker/?limit=3", 200, &body.to_string());

        let index = client_with(transport).all_coins(Some(3)).await.unwrap();

        assert_eq!(index.len(), 2);
        assert_eq!(index.by_name().len(), 2);
        assert!(index.get_by_name("broken").is_none());

        for coin in index.by_symbol().values() {
            let by_name = index.by_name().get(&coin.name.to_lowercase()).unwrap();
            assert!(Arc::ptr_eq(coin, by_name));
        }
        assert_eq!(index.get_by_name("ETHEREUM").unwrap().symbol, "ETH");
    }

    #[tokio::test]
    async fn test_coin_graph_converts_seconds_to_millis() {
        let transport = Arc::new(MockTransport::new());
        transport.set_response(
            "http://graphs.mock/currencies/bitcoin/1000000/2000000",
            200,
            r#"{
                "market_cap_by_available_supply": [[1000000, 10.0], [2000000, 11.0]],
                "price_btc": [[1000000, 1.0], [2000000, 1.0]],
                "price_usd": [[1000000, 100.5], [2000000, 101.25]],
                "volume_usd": [[1000000, 0], [2000000, 5]]
            }"#,
        );

        let graph = client_with(transport.clone())
            .coin_graph("bitcoin", 1000, 2000)
            .await
            .unwrap();

        let requested = transport.requests();
        assert_eq!(requested.len(), 1);
        assert!(requested[0].contains("1000000"));
        assert!(requested[0].contains("2000000"));
        assert!(!requested[0].ends_with("/1000/2000"));
        assert_eq!(graph.price_usd[1].value(), 101.25);
        assert_eq!(graph.time_range(), Some((1000000, 2000000)));
    }

    #[tokio::test]
    async fn test_coin_graph_passes_inverted_range_through() {
        let transport = Arc::new(MockTransport::new());
        transport.set_response("http://graphs.mock/currencies/ethereum/5000/1000", 200, "{}");

        let graph = client_with(transport.clone())
            .coin_graph("ethereum", 5, 1)
            .await
            .unwrap();

        assert!(graph.is_empty());
        assert_eq!(
            transport.requests(),
            vec!["http://graphs.mock/currencies/ethereum/5000/1000"]
        );
    }

    #[test]
    fn test_client_is_send_sync_clone() {
        fn assert_traits<T: Send + Sync + Clone>() {}
        assert_traits::<CoinMarketCapClient>();
    }

    #[test]
    fn test_with_config_builds_reqwest_transport() {
        let client = CoinMarketCapClient::with_config(
            ClientConfig::default().with_ticker_base_url("http://localhost:1/v1"),
        )
        .unwrap();
        assert_eq!(client.config().ticker_base_url(), "http://localhost:1/v1");
    }
}
