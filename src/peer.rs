//! The remote-call pattern shared by every peer client.
//!
//! A call to a peer service either produces a value, establishes that the
//! resource does not exist, or tells us nothing because the peer could not
//! be reached. [`PeerOutcome`] keeps those three cases apart so each caller
//! can decide whether to degrade gracefully (the account aggregate) or
//! reject the operation (the creation gates).

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use url::Url;

/// Error raised by the HTTP transport.
#[derive(Debug, thiserror::Error)]
#[error("peer request failed: {0}")]
pub struct TransportError(String);

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        Self(err.to_string())
    }
}

/// Raw response from a peer, before outcome mapping.
pub struct PeerResponse {
    pub status: u16,
    pub body: String,
}

/// Issues HTTP requests to peer services.
///
/// Injected into the clients so services can be exercised without a
/// network.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get(&self, url: Url) -> Result<PeerResponse, TransportError>;
}

/// Production transport backed by reqwest.
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Build a transport with a 5 second timeout per request.
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(5))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: Url) -> Result<PeerResponse, TransportError> {
        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(PeerResponse { status, body })
    }
}

/// Result of a remote call against a peer service.
#[derive(Debug, Clone, PartialEq)]
pub enum PeerOutcome<T> {
    /// The peer answered 2xx with a decodable body.
    Found(T),

    /// The peer answered 404: the resource definitely does not exist.
    Missing,

    /// Resolution failed, the request failed, the peer answered with an
    /// unexpected status, or the body was not decodable. Nothing is known
    /// about the resource.
    Unreachable,
}

/// GET `url` and decode a JSON body of type `T`.
///
/// # Outcome Mapping
///
/// - 2xx with a decodable body → `Found`
/// - 404 → `Missing`
/// - anything else (transport error, other status, undecodable body) →
///   `Unreachable`, logged at warn
pub async fn get_json<T: DeserializeOwned>(
    transport: &dyn HttpTransport,
    url: Url,
) -> PeerOutcome<T> {
    let response = match transport.get(url.clone()).await {
        Ok(response) => response,
        Err(err) => {
            tracing::warn!("GET {} failed: {}", url, err);
            return PeerOutcome::Unreachable;
        }
    };

    match response.status {
        200..=299 => match serde_json::from_str(&response.body) {
            Ok(value) => PeerOutcome::Found(value),
            Err(err) => {
                tracing::warn!("GET {} returned an undecodable body: {}", url, err);
                PeerOutcome::Unreachable
            }
        },
        404 => PeerOutcome::Missing,
        status => {
            tracing::warn!("GET {} answered {}", url, status);
            PeerOutcome::Unreachable
        }
    }
}

/// GET `url` and keep only whether the resource exists.
///
/// Any 2xx counts as existing; the body is not inspected.
pub async fn probe(transport: &dyn HttpTransport, url: Url) -> PeerOutcome<()> {
    let response = match transport.get(url.clone()).await {
        Ok(response) => response,
        Err(err) => {
            tracing::warn!("GET {} failed: {}", url, err);
            return PeerOutcome::Unreachable;
        }
    };

    match response.status {
        200..=299 => PeerOutcome::Found(()),
        404 => PeerOutcome::Missing,
        status => {
            tracing::warn!("GET {} answered {}", url, status);
            PeerOutcome::Unreachable
        }
    }
}
