//! Account data models and API request/response types.
//!
//! This module defines:
//! - `Account`: Database entity representing an account
//! - `SaveAccountRequest`: Request body for creating or updating accounts
//! - `AccountResponse`: Response body returned to clients
//! - `AccountView`: Aggregate of an account with its cards and loans

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::card::CardResponse;
use crate::models::loan::LoanResponse;

/// Represents an account record from the database.
///
/// # Balance Storage
///
/// Balances are stored as `i64` cents to avoid floating-point precision
/// issues. For example, $10.50 is stored as 1050 cents.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Account {
    /// Unique identifier for this account
    pub id: Uuid,

    /// Account holder's name
    pub name: String,

    /// Account holder's email address
    pub email: String,

    /// Current balance in cents (not dollars)
    pub balance_cents: i64,

    /// Timestamp when account was created
    pub created_at: DateTime<Utc>,

    /// Timestamp of last update
    pub updated_at: DateTime<Utc>,
}

/// Request body for creating or updating an account.
///
/// A request carrying an `id` updates (or re-creates) that row; without one
/// a new account is created with a generated id.
///
/// # JSON Example
///
/// ```json
/// {
///   "name": "Ada Lovelace",
///   "email": "ada@example.com",
///   "balance_cents": 10000
/// }
/// ```
#[derive(Debug, Deserialize)]
pub struct SaveAccountRequest {
    /// Target account id; omit to create a new account
    pub id: Option<Uuid>,

    /// Account holder's name
    pub name: String,

    /// Account holder's email address
    pub email: String,

    /// Balance in cents (defaults to 0 if not provided)
    #[serde(default)]
    pub balance_cents: i64,
}

/// Response body for account endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct AccountResponse {
    /// Account unique identifier
    pub id: Uuid,

    /// Account holder's name
    pub name: String,

    /// Account holder's email address
    pub email: String,

    /// Current balance in cents
    pub balance_cents: i64,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            name: account.name,
            email: account.email,
            balance_cents: account.balance_cents,
            created_at: account.created_at,
            updated_at: account.updated_at,
        }
    }
}

/// Account enriched with its cards and loans.
///
/// Composed per request from the card and loan services; never persisted.
/// Either list degrades to empty when its peer reported nothing or could
/// not be reached.
#[derive(Debug, Serialize)]
pub struct AccountView {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub balance_cents: i64,

    /// Cards reported by the card service
    pub cards: Vec<CardResponse>,

    /// Loans reported by the loan service
    pub loans: Vec<LoanResponse>,
}
