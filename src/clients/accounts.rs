//! Existence probe against the account service.
//!
//! Used by the card and loan services to gate creation on the owning
//! account actually existing.

use std::sync::Arc;

use uuid::Uuid;

use crate::discovery::{ACCOUNT_SERVICE, PeerResolver};
use crate::peer::{self, HttpTransport, PeerOutcome};

/// Asks the account service whether an account exists.
pub struct AccountClient {
    resolver: Arc<PeerResolver>,
    transport: Arc<dyn HttpTransport>,
}

impl AccountClient {
    pub fn new(resolver: Arc<PeerResolver>, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            resolver,
            transport,
        }
    }

    /// Whether `account_id` exists according to the account service.
    ///
    /// Probes `GET /accounts/{account_id}`; any 2xx counts as existing and
    /// the body is not inspected. `Missing` means the account service
    /// answered 404; `Unreachable` means no answer was obtained at all, and
    /// callers decide which of the two blocks their operation.
    pub async fn account_exists(&self, account_id: Uuid) -> PeerOutcome<()> {
        let Some(base) = self.resolver.endpoint(ACCOUNT_SERVICE).await else {
            return PeerOutcome::Unreachable;
        };
        let Ok(url) = base.join(&format!("accounts/{account_id}")) else {
            return PeerOutcome::Unreachable;
        };
        peer::probe(self.transport.as_ref(), url).await
    }
}
