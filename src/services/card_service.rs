//! Card service - use cases for the card entity.
//!
//! Creation is gated on a remote existence probe against the account
//! service; everything else is a direct repository call.

use std::sync::Arc;

use uuid::Uuid;

use crate::clients::AccountClient;
use crate::error::AppError;
use crate::models::card::{Card, CreateCardRequest};
use crate::peer::PeerOutcome;
use crate::repository::CardRepository;

/// Orchestrates the card repository and the account existence probe.
pub struct CardService {
    repository: Arc<dyn CardRepository>,
    accounts: AccountClient,
}

impl CardService {
    pub fn new(repository: Arc<dyn CardRepository>, accounts: AccountClient) -> Self {
        Self {
            repository,
            accounts,
        }
    }

    /// All cards, newest first.
    pub async fn list(&self) -> Result<Vec<Card>, AppError> {
        Ok(self.repository.find_all().await?)
    }

    /// One card by id.
    ///
    /// # Errors
    ///
    /// - `CardNotFound`: no card has this id
    pub async fn get(&self, id: Uuid) -> Result<Card, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(AppError::CardNotFound)
    }

    /// Cards owned by `account_id`.
    ///
    /// Direct repository query; the account is not re-checked. An unknown
    /// account simply yields an empty list.
    pub async fn by_account(&self, account_id: Uuid) -> Result<Vec<Card>, AppError> {
        Ok(self.repository.find_by_account_id(account_id).await?)
    }

    /// Create a card, gated on the owning account existing.
    ///
    /// # Process
    ///
    /// 1. Probe the account service for `request.account_id`
    /// 2. Reject when the account is known missing, or when the account
    ///    service cannot be reached; nothing is persisted either way
    /// 3. Persist and return the card
    ///
    /// "Account missing" and "account service down" are kept apart so a bad
    /// request is distinguishable from a degraded platform.
    ///
    /// # Errors
    ///
    /// - `InvalidRequest`: card number is empty
    /// - `AccountNotFound`: the account service answered 404 for the owner
    /// - `PeerUnavailable`: the account service gave no answer
    pub async fn create(&self, request: CreateCardRequest) -> Result<Card, AppError> {
        if request.card_number.trim().is_empty() {
            return Err(AppError::InvalidRequest(
                "Card number must not be empty".to_string(),
            ));
        }

        match self.accounts.account_exists(request.account_id).await {
            PeerOutcome::Found(()) => {}
            PeerOutcome::Missing => return Err(AppError::AccountNotFound),
            PeerOutcome::Unreachable => {
                return Err(AppError::PeerUnavailable("account service"));
            }
        }

        Ok(self.repository.save(request).await?)
    }

    /// Delete a card. No existence re-check against the account service.
    ///
    /// # Errors
    ///
    /// - `CardNotFound`: no card has this id
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        if !self.repository.delete_by_id(id).await? {
            return Err(AppError::CardNotFound);
        }
        Ok(())
    }
}
