//! HTTP transport abstraction used by the client
//!
//! The client only ever issues unauthenticated GETs and needs the status code
//! plus the full body text back. Anything able to do that can stand in for
//! the default reqwest-based transport.

use crate::{config::ClientConfig, error::TransportError};
use async_trait::async_trait;
use reqwest::Client;

/// Status and body of a completed HTTP request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Trait for the HTTP layer underneath the client
///
/// Implementations must be safe to share between tasks; the client holds one
/// behind an `Arc` and calls it concurrently.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Issues a GET and returns the status with the fully read body
    ///
    /// # Arguments
    /// * `url` - Fully formed request URL
    ///
    /// # Returns
    /// The response for any status code, or an error if no complete response
    /// was received
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError>;
}

/// Default transport backed by a pooled `reqwest::Client`
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Builds a reqwest client with the timeout and user agent from `config`
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent())
            .build()
            .map_err(TransportError::Network)?;

        Ok(Self { client })
    }

    /// Wraps an already configured reqwest client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(TransportError::from_reqwest)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(TransportError::from_reqwest)?;

        Ok(HttpResponse { status, body })
    }
}
