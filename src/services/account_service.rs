//! Account service - use cases for the account entity, including the
//! cards-and-loans aggregate view.

use std::sync::Arc;

use uuid::Uuid;

use crate::clients::{CardClient, LoanClient};
use crate::error::AppError;
use crate::models::account::{Account, AccountView, SaveAccountRequest};
use crate::peer::PeerOutcome;
use crate::repository::AccountRepository;

/// Orchestrates the account repository and the card/loan peer clients.
pub struct AccountService {
    repository: Arc<dyn AccountRepository>,
    cards: CardClient,
    loans: LoanClient,
}

impl AccountService {
    pub fn new(
        repository: Arc<dyn AccountRepository>,
        cards: CardClient,
        loans: LoanClient,
    ) -> Self {
        Self {
            repository,
            cards,
            loans,
        }
    }

    /// All accounts, newest first.
    pub async fn list(&self) -> Result<Vec<Account>, AppError> {
        Ok(self.repository.find_all().await?)
    }

    /// One account by id.
    ///
    /// # Errors
    ///
    /// - `AccountNotFound`: no account has this id
    pub async fn get(&self, id: Uuid) -> Result<Account, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(AppError::AccountNotFound)
    }

    /// Build the aggregate view of an account with its cards and loans.
    ///
    /// # Process
    ///
    /// 1. Fetch the account; a miss fails the whole request
    /// 2. Ask the card and loan services for the account's records, both
    ///    calls issued concurrently
    /// 3. Compose the view, degrading either list to empty when its peer
    ///    reported nothing or could not be reached
    ///
    /// Peer failures never fail the aggregate: the caller gets a
    /// best-effort view and the degradation is logged.
    pub async fn aggregate(&self, id: Uuid) -> Result<AccountView, AppError> {
        let account = self.get(id).await?;

        // Independent reads; no reason to serialize them
        let (cards, loans) = tokio::join!(
            self.cards.cards_by_account(id),
            self.loans.loans_by_account(id),
        );

        let cards = match cards {
            PeerOutcome::Found(cards) => cards,
            PeerOutcome::Missing => Vec::new(),
            PeerOutcome::Unreachable => {
                tracing::warn!("card service unreachable, composing account {} without cards", id);
                Vec::new()
            }
        };

        let loans = match loans {
            PeerOutcome::Found(loans) => loans,
            PeerOutcome::Missing => Vec::new(),
            PeerOutcome::Unreachable => {
                tracing::warn!("loan service unreachable, composing account {} without loans", id);
                Vec::new()
            }
        };

        Ok(AccountView {
            id: account.id,
            name: account.name,
            email: account.email,
            balance_cents: account.balance_cents,
            cards,
            loans,
        })
    }

    /// Create or update an account (pass-through to the repository).
    ///
    /// # Errors
    ///
    /// - `InvalidRequest`: name or email is empty
    pub async fn save(&self, request: SaveAccountRequest) -> Result<Account, AppError> {
        if request.name.trim().is_empty() {
            return Err(AppError::InvalidRequest(
                "Name must not be empty".to_string(),
            ));
        }
        if request.email.trim().is_empty() {
            return Err(AppError::InvalidRequest(
                "Email must not be empty".to_string(),
            ));
        }

        Ok(self.repository.save(request).await?)
    }

    /// Delete an account.
    ///
    /// Does not cascade: cards and loans referencing the account are left
    /// in place in their own services.
    ///
    /// # Errors
    ///
    /// - `AccountNotFound`: no account has this id
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        if !self.repository.delete_by_id(id).await? {
            return Err(AppError::AccountNotFound);
        }
        Ok(())
    }
}
