#![allow(dead_code)]

//! Shared fakes for the integration tests: in-memory repositories, a
//! scripted transport and registry/service builders.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use url::Url;
use uuid::Uuid;

use bank_services::clients::{AccountClient, CardClient, LoanClient};
use bank_services::discovery::{
    ACCOUNT_SERVICE, CARD_SERVICE, FirstInstance, LOAN_SERVICE, PeerResolver, StaticRegistry,
};
use bank_services::models::account::{Account, SaveAccountRequest};
use bank_services::models::card::{Card, CreateCardRequest};
use bank_services::models::loan::{CreateLoanRequest, Loan};
use bank_services::peer::{HttpTransport, PeerResponse, TransportError};
use bank_services::repository::{AccountRepository, CardRepository, LoanRepository};
use bank_services::services::{AccountService, CardService, LoanService};

pub fn url(raw: &str) -> Url {
    Url::parse(raw).unwrap()
}

/// Registry with all three services registered under one instance each.
pub fn full_registry() -> StaticRegistry {
    StaticRegistry::new()
        .register(ACCOUNT_SERVICE, vec![url("http://accounts.internal")])
        .register(CARD_SERVICE, vec![url("http://cards.internal")])
        .register(LOAN_SERVICE, vec![url("http://loans.internal")])
}

pub fn peer_resolver(registry: StaticRegistry) -> Arc<PeerResolver> {
    Arc::new(PeerResolver::new(Arc::new(registry), Box::new(FirstInstance)))
}

/// Transport that answers from a canned table keyed by URL path prefix.
/// Paths with no entry fail exactly like a dead peer.
pub struct ScriptedTransport {
    routes: HashMap<String, (u16, String)>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self {
            routes: HashMap::new(),
        }
    }

    pub fn route(mut self, prefix: &str, status: u16, body: impl Into<String>) -> Self {
        self.routes.insert(prefix.to_string(), (status, body.into()));
        self
    }
}

#[async_trait]
impl HttpTransport for ScriptedTransport {
    async fn get(&self, url: Url) -> Result<PeerResponse, TransportError> {
        for (prefix, (status, body)) in &self.routes {
            if url.path().starts_with(prefix.as_str()) {
                return Ok(PeerResponse {
                    status: *status,
                    body: body.clone(),
                });
            }
        }
        Err(TransportError::new("connection refused"))
    }
}

/// In-memory stand-in for the account repository.
#[derive(Default)]
pub struct MemoryAccounts {
    rows: Mutex<Vec<Account>>,
}

#[async_trait]
impl AccountRepository for MemoryAccounts {
    async fn find_all(&self) -> Result<Vec<Account>, sqlx::Error> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, sqlx::Error> {
        Ok(self.rows.lock().unwrap().iter().find(|a| a.id == id).cloned())
    }

    async fn save(&self, request: SaveAccountRequest) -> Result<Account, sqlx::Error> {
        let mut rows = self.rows.lock().unwrap();
        let now = Utc::now();

        if let Some(id) = request.id {
            if let Some(row) = rows.iter_mut().find(|a| a.id == id) {
                row.name = request.name;
                row.email = request.email;
                row.balance_cents = request.balance_cents;
                row.updated_at = now;
                return Ok(row.clone());
            }
        }

        let account = Account {
            id: request.id.unwrap_or_else(Uuid::new_v4),
            name: request.name,
            email: request.email,
            balance_cents: request.balance_cents,
            created_at: now,
            updated_at: now,
        };
        rows.push(account.clone());
        Ok(account)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|a| a.id != id);
        Ok(rows.len() != before)
    }
}

/// In-memory stand-in for the card repository.
#[derive(Default)]
pub struct MemoryCards {
    rows: Mutex<Vec<Card>>,
}

#[async_trait]
impl CardRepository for MemoryCards {
    async fn find_all(&self) -> Result<Vec<Card>, sqlx::Error> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Card>, sqlx::Error> {
        Ok(self.rows.lock().unwrap().iter().find(|c| c.id == id).cloned())
    }

    async fn find_by_account_id(&self, account_id: Uuid) -> Result<Vec<Card>, sqlx::Error> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.account_id == account_id)
            .cloned()
            .collect())
    }

    async fn save(&self, request: CreateCardRequest) -> Result<Card, sqlx::Error> {
        let card = Card {
            id: Uuid::new_v4(),
            card_number: request.card_number,
            card_type: request.card_type,
            account_id: request.account_id,
            created_at: Utc::now(),
        };
        self.rows.lock().unwrap().push(card.clone());
        Ok(card)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|c| c.id != id);
        Ok(rows.len() != before)
    }
}

/// In-memory stand-in for the loan repository.
#[derive(Default)]
pub struct MemoryLoans {
    rows: Mutex<Vec<Loan>>,
}

#[async_trait]
impl LoanRepository for MemoryLoans {
    async fn find_all(&self) -> Result<Vec<Loan>, sqlx::Error> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Loan>, sqlx::Error> {
        Ok(self.rows.lock().unwrap().iter().find(|l| l.id == id).cloned())
    }

    async fn find_by_account_id(&self, account_id: Uuid) -> Result<Vec<Loan>, sqlx::Error> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|l| l.account_id == account_id)
            .cloned()
            .collect())
    }

    async fn save(&self, request: CreateLoanRequest) -> Result<Loan, sqlx::Error> {
        let loan = Loan {
            id: Uuid::new_v4(),
            account_id: request.account_id,
            amount_cents: request.amount_cents,
            loan_type: request.loan_type,
            created_at: Utc::now(),
        };
        self.rows.lock().unwrap().push(loan.clone());
        Ok(loan)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|l| l.id != id);
        Ok(rows.len() != before)
    }
}

pub fn account_service(
    repo: Arc<MemoryAccounts>,
    registry: StaticRegistry,
    transport: Arc<dyn HttpTransport>,
) -> AccountService {
    let resolver = peer_resolver(registry);
    AccountService::new(
        repo,
        CardClient::new(resolver.clone(), transport.clone()),
        LoanClient::new(resolver, transport),
    )
}

pub fn card_service(
    repo: Arc<MemoryCards>,
    registry: StaticRegistry,
    transport: Arc<dyn HttpTransport>,
) -> CardService {
    CardService::new(repo, AccountClient::new(peer_resolver(registry), transport))
}

pub fn loan_service(
    repo: Arc<MemoryLoans>,
    registry: StaticRegistry,
    transport: Arc<dyn HttpTransport>,
) -> LoanService {
    LoanService::new(repo, AccountClient::new(peer_resolver(registry), transport))
}

/// Insert an account straight through the repository fake.
pub async fn seed_account(
    repo: &MemoryAccounts,
    name: &str,
    email: &str,
    balance_cents: i64,
) -> Account {
    repo.save(SaveAccountRequest {
        id: None,
        name: name.to_string(),
        email: email.to_string(),
        balance_cents,
    })
    .await
    .unwrap()
}
