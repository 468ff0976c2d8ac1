//! Error types for the CoinMarketCap client

use thiserror::Error;

/// Errors raised while getting a response body from the upstream service
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection, DNS or body read failure
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Request did not complete within the configured timeout
    #[error("Request timeout")]
    Timeout(#[source] reqwest::Error),

    /// The request URL could not be built
    #[error("Invalid request URL: {0}")]
    InvalidUrl(#[source] reqwest::Error),

    /// Upstream answered with anything other than 200.
    ///
    /// The body is kept verbatim and is the whole display message.
    #[error("{body}")]
    Status { status: u16, body: String },
}

impl TransportError {
    /// Wraps a reqwest failure, separating out timeouts
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err)
        } else if err.is_builder() {
            Self::InvalidUrl(err)
        } else {
            Self::Network(err)
        }
    }
}

/// Errors returned by every client operation
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request could not be completed or returned a non-200 status
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The body was not valid JSON or did not match the expected shape
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The upstream returned an empty result for a single-coin lookup
    #[error("Coin not found: {coin_id}")]
    NotFound { coin_id: String },
}

impl ClientError {
    /// Creates a NotFound error
    pub fn not_found(coin_id: impl Into<String>) -> Self {
        Self::NotFound {
            coin_id: coin_id.into(),
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// HTTP status of a non-200 response, if that is what failed
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Transport(TransportError::Status { status, .. }) => Some(*status),
            _ => None,
        }
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, ClientError>;
