//! Client for the card service.

use std::sync::Arc;

use uuid::Uuid;

use crate::discovery::{CARD_SERVICE, PeerResolver};
use crate::models::card::CardResponse;
use crate::peer::{self, HttpTransport, PeerOutcome};

/// Fetches cards from the card service on behalf of the account service.
pub struct CardClient {
    resolver: Arc<PeerResolver>,
    transport: Arc<dyn HttpTransport>,
}

impl CardClient {
    pub fn new(resolver: Arc<PeerResolver>, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            resolver,
            transport,
        }
    }

    /// All cards owned by `account_id`.
    ///
    /// Consumes `GET /cards/accounts/{account_id}` on whichever card-service
    /// instance the resolver picks. An unresolvable peer is reported as
    /// `Unreachable`, exactly like a failed request.
    pub async fn cards_by_account(&self, account_id: Uuid) -> PeerOutcome<Vec<CardResponse>> {
        let Some(base) = self.resolver.endpoint(CARD_SERVICE).await else {
            return PeerOutcome::Unreachable;
        };
        let Ok(url) = base.join(&format!("cards/accounts/{account_id}")) else {
            return PeerOutcome::Unreachable;
        };
        peer::get_json(self.transport.as_ref(), url).await
    }
}
