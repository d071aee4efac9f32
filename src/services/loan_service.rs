//! Loan service - use cases for the loan entity.
//!
//! Follows the card service's shape: creation is gated on the account
//! existence probe, everything else goes straight to the repository.

use std::sync::Arc;

use uuid::Uuid;

use crate::clients::AccountClient;
use crate::error::AppError;
use crate::models::loan::{CreateLoanRequest, Loan};
use crate::peer::PeerOutcome;
use crate::repository::LoanRepository;

/// Orchestrates the loan repository and the account existence probe.
pub struct LoanService {
    repository: Arc<dyn LoanRepository>,
    accounts: AccountClient,
}

impl LoanService {
    pub fn new(repository: Arc<dyn LoanRepository>, accounts: AccountClient) -> Self {
        Self {
            repository,
            accounts,
        }
    }

    /// All loans, newest first.
    pub async fn list(&self) -> Result<Vec<Loan>, AppError> {
        Ok(self.repository.find_all().await?)
    }

    /// One loan by id.
    ///
    /// # Errors
    ///
    /// - `LoanNotFound`: no loan has this id
    pub async fn get(&self, id: Uuid) -> Result<Loan, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(AppError::LoanNotFound)
    }

    /// Loans owned by `account_id`. Direct repository query.
    pub async fn by_account(&self, account_id: Uuid) -> Result<Vec<Loan>, AppError> {
        Ok(self.repository.find_by_account_id(account_id).await?)
    }

    /// Create a loan, gated on the owning account existing.
    ///
    /// Same gate as card creation: a 404 from the account service rejects
    /// with `AccountNotFound`, no answer at all rejects with
    /// `PeerUnavailable`, and nothing is persisted in either case.
    ///
    /// # Errors
    ///
    /// - `InvalidRequest`: amount is zero or negative
    /// - `AccountNotFound`: the account service answered 404 for the owner
    /// - `PeerUnavailable`: the account service gave no answer
    pub async fn create(&self, request: CreateLoanRequest) -> Result<Loan, AppError> {
        // Validate amount
        if request.amount_cents <= 0 {
            return Err(AppError::InvalidRequest(
                "Amount must be positive".to_string(),
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

    /// Delete a loan. No existence re-check against the account service.
    ///
    /// # Errors
    ///
    /// - `LoanNotFound`: no loan has this id
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        if !self.repository.delete_by_id(id).await? {
            return Err(AppError::LoanNotFound);
        }
        Ok(())
    }
}
