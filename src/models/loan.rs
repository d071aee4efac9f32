//! Loan data models and API request/response types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a loan record from the database.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Loan {
    /// Unique identifier for this loan
    pub id: Uuid,

    /// Owning account, held as a plain id (see `Card::account_id`)
    pub account_id: Uuid,

    /// Principal in cents
    pub amount_cents: i64,

    /// Loan product type, e.g. "PERSONAL" or "MORTGAGE"
    pub loan_type: String,

    /// Timestamp when loan was created
    pub created_at: DateTime<Utc>,
}

/// Request body for creating a new loan.
///
/// The owning account must exist according to the account service; creation
/// is rejected otherwise.
#[derive(Debug, Deserialize)]
pub struct CreateLoanRequest {
    pub account_id: Uuid,
    pub amount_cents: i64,
    pub loan_type: String,
}

/// Wire shape for a loan.
///
/// Returned by the loan service's endpoints, and decoded by the account
/// service when it asks for an account's loans.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanResponse {
    pub id: Uuid,
    pub account_id: Uuid,
    pub amount_cents: i64,
    pub loan_type: String,
    pub created_at: DateTime<Utc>,
}

impl From<Loan> for LoanResponse {
    fn from(loan: Loan) -> Self {
        Self {
            id: loan.id,
            account_id: loan.account_id,
            amount_cents: loan.amount_cents,
            loan_type: loan.loan_type,
            created_at: loan.created_at,
        }
    }
}
