//! Client for the loan service.

use std::sync::Arc;

use uuid::Uuid;

use crate::discovery::{LOAN_SERVICE, PeerResolver};
use crate::models::loan::LoanResponse;
use crate::peer::{self, HttpTransport, PeerOutcome};

/// Fetches loans from the loan service on behalf of the account service.
pub struct LoanClient {
    resolver: Arc<PeerResolver>,
    transport: Arc<dyn HttpTransport>,
}

impl LoanClient {
    pub fn new(resolver: Arc<PeerResolver>, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            resolver,
            transport,
        }
    }

    /// All loans owned by `account_id`.
    ///
    /// Consumes `GET /loans/accounts/{account_id}` on whichever loan-service
    /// instance the resolver picks.
    pub async fn loans_by_account(&self, account_id: Uuid) -> PeerOutcome<Vec<LoanResponse>> {
        let Some(base) = self.resolver.endpoint(LOAN_SERVICE).await else {
            return PeerOutcome::Unreachable;
        };
        let Ok(url) = base.join(&format!("loans/accounts/{account_id}")) else {
            return PeerOutcome::Unreachable;
        };
        peer::get_json(self.transport.as_ref(), url).await
    }
}
