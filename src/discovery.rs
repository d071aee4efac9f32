//! Service discovery and peer instance resolution.
//!
//! The discovery registry itself is an external collaborator; this module
//! only consumes it. A [`ServiceRegistry`] lists the base URLs registered
//! under a logical service name, a [`SelectionPolicy`] picks one of them,
//! and [`PeerResolver`] combines the two into "give me an endpoint for
//! `card-service`".
//!
//! Resolution never fails loudly: a registry error or an empty instance
//! list both come back as `None`, and callers treat that exactly like a
//! failed network call to the peer.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use url::Url;

/// Logical name the account service registers under.
pub const ACCOUNT_SERVICE: &str = "account-service";

/// Logical name the card service registers under.
pub const CARD_SERVICE: &str = "card-service";

/// Logical name the loan service registers under.
pub const LOAN_SERVICE: &str = "loans-service";

/// Error raised by a registry lookup.
#[derive(Debug, thiserror::Error)]
#[error("registry lookup failed: {0}")]
pub struct RegistryError(String);

impl RegistryError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl From<reqwest::Error> for RegistryError {
    fn from(err: reqwest::Error) -> Self {
        Self(err.to_string())
    }
}

/// Lists the instances registered under a logical service name.
#[async_trait]
pub trait ServiceRegistry: Send + Sync {
    /// Base URLs registered under `service`, in registry order. May be empty.
    async fn instances(&self, service: &str) -> Result<Vec<Url>, RegistryError>;
}

/// Registry client backed by an external HTTP discovery service.
///
/// # Consumed Surface
///
/// `GET {base}/instances/{service}` returning a JSON array of base URL
/// strings, e.g. `["http://10.0.0.5:8200"]`. Entries that do not parse as
/// URLs are skipped.
pub struct HttpRegistry {
    base: Url,
    client: reqwest::Client,
}

impl HttpRegistry {
    /// Build a registry client for the discovery service at `base`.
    pub fn new(base: Url) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(5))
            .build()?;
        Ok(Self { base, client })
    }
}

#[async_trait]
impl ServiceRegistry for HttpRegistry {
    async fn instances(&self, service: &str) -> Result<Vec<Url>, RegistryError> {
        let url = format!(
            "{}/instances/{}",
            self.base.as_str().trim_end_matches('/'),
            service
        );

        let entries: Vec<String> = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        // Tolerate junk registrations instead of failing the whole lookup
        Ok(entries.iter().filter_map(|e| Url::parse(e).ok()).collect())
    }
}

/// Fixed service table, used in development and tests.
#[derive(Default)]
pub struct StaticRegistry {
    entries: HashMap<String, Vec<Url>>,
}

impl StaticRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `instances` under `service`, replacing any previous entry.
    pub fn register(mut self, service: &str, instances: Vec<Url>) -> Self {
        self.entries.insert(service.to_string(), instances);
        self
    }
}

#[async_trait]
impl ServiceRegistry for StaticRegistry {
    async fn instances(&self, service: &str) -> Result<Vec<Url>, RegistryError> {
        Ok(self.entries.get(service).cloned().unwrap_or_default())
    }
}

/// Picks one instance out of a registry listing.
pub trait SelectionPolicy: Send + Sync {
    /// Returns the instance to call, or `None` when the list is empty.
    fn select<'a>(&self, instances: &'a [Url]) -> Option<&'a Url>;
}

/// Always the first registered instance.
///
/// The policy the services historically ran with: no load balancing and no
/// health filtering.
pub struct FirstInstance;

impl SelectionPolicy for FirstInstance {
    fn select<'a>(&self, instances: &'a [Url]) -> Option<&'a Url> {
        instances.first()
    }
}

/// Rotates through the registered instances call by call.
pub struct RoundRobin {
    cursor: AtomicUsize,
}

impl RoundRobin {
    pub fn new() -> Self {
        Self {
            cursor: AtomicUsize::new(0),
        }
    }
}

impl Default for RoundRobin {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionPolicy for RoundRobin {
    fn select<'a>(&self, instances: &'a [Url]) -> Option<&'a Url> {
        if instances.is_empty() {
            return None;
        }
        let n = self.cursor.fetch_add(1, Ordering::Relaxed);
        instances.get(n % instances.len())
    }
}

/// Resolves a logical service name to a single usable endpoint.
///
/// Registry and policy are injected, so the resolution strategy can change
/// without touching the clients that depend on it.
pub struct PeerResolver {
    registry: Arc<dyn ServiceRegistry>,
    policy: Box<dyn SelectionPolicy>,
}

impl PeerResolver {
    pub fn new(registry: Arc<dyn ServiceRegistry>, policy: Box<dyn SelectionPolicy>) -> Self {
        Self { registry, policy }
    }

    /// Endpoint for `service`, or `None` when the registry cannot be
    /// reached or lists no instances.
    ///
    /// Callers must treat `None` the same way as a failed call to the peer
    /// itself: nothing is known about the resource they were after.
    pub async fn endpoint(&self, service: &str) -> Option<Url> {
        match self.registry.instances(service).await {
            Ok(instances) => {
                let picked = self.policy.select(&instances).cloned();
                if picked.is_none() {
                    tracing::warn!("no instances registered for {}", service);
                }
                picked
            }
            Err(err) => {
                tracing::warn!("discovery lookup for {} failed: {}", service, err);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenRegistry;

    #[async_trait]
    impl ServiceRegistry for BrokenRegistry {
        async fn instances(&self, _service: &str) -> Result<Vec<Url>, RegistryError> {
            Err(RegistryError::new("connection refused"))
        }
    }

    fn urls(raw: &[&str]) -> Vec<Url> {
        raw.iter().map(|u| Url::parse(u).unwrap()).collect()
    }

    #[test]
    fn first_instance_takes_the_head() {
        let instances = urls(&["http://a:8000", "http://b:8000"]);
        let picked = FirstInstance.select(&instances).unwrap();
        assert_eq!(picked.as_str(), "http://a:8000/");
    }

    #[test]
    fn first_instance_handles_empty_list() {
        assert!(FirstInstance.select(&[]).is_none());
    }

    #[test]
    fn round_robin_cycles_through_instances() {
        let instances = urls(&["http://a:8000", "http://b:8000"]);
        let policy = RoundRobin::new();
        assert_eq!(policy.select(&instances).unwrap().as_str(), "http://a:8000/");
        assert_eq!(policy.select(&instances).unwrap().as_str(), "http://b:8000/");
        assert_eq!(policy.select(&instances).unwrap().as_str(), "http://a:8000/");
    }

    #[test]
    fn round_robin_handles_empty_list() {
        assert!(RoundRobin::new().select(&[]).is_none());
    }

    #[tokio::test]
    async fn resolver_absorbs_registry_failures() {
        let resolver = PeerResolver::new(Arc::new(BrokenRegistry), Box::new(FirstInstance));
        assert!(resolver.endpoint(CARD_SERVICE).await.is_none());
    }

    #[tokio::test]
    async fn resolver_treats_unknown_service_as_absent() {
        let registry = StaticRegistry::new().register(CARD_SERVICE, urls(&["http://a:8000"]));
        let resolver = PeerResolver::new(Arc::new(registry), Box::new(FirstInstance));
        assert!(resolver.endpoint(LOAN_SERVICE).await.is_none());
        assert!(resolver.endpoint(CARD_SERVICE).await.is_some());
    }
}
