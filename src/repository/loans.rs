//! Loan persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::db::DbPool;
use crate::models::loan::{CreateLoanRequest, Loan};

/// Persistence operations for loans.
#[async_trait]
pub trait LoanRepository: Send + Sync {
    /// All loans, newest first.
    async fn find_all(&self) -> Result<Vec<Loan>, sqlx::Error>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Loan>, sqlx::Error>;

    /// Loans owned by `account_id`, newest first.
    async fn find_by_account_id(&self, account_id: Uuid) -> Result<Vec<Loan>, sqlx::Error>;

    async fn save(&self, request: CreateLoanRequest) -> Result<Loan, sqlx::Error>;

    /// Returns `false` when no row matched.
    async fn delete_by_id(&self, id: Uuid) -> Result<bool, sqlx::Error>;
}

/// sqlx-backed repository over the loan service's database.
pub struct PgLoanRepository {
    pool: DbPool,
}

impl PgLoanRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LoanRepository for PgLoanRepository {
    async fn find_all(&self) -> Result<Vec<Loan>, sqlx::Error> {
        sqlx::query_as::<_, Loan>(
            r#"
            SELECT id, account_id, amount_cents, loan_type, created_at
            FROM loans
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Loan>, sqlx::Error> {
        sqlx::query_as::<_, Loan>(
            r#"
            SELECT id, account_id, amount_cents, loan_type, created_at
            FROM loans
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn find_by_account_id(&self, account_id: Uuid) -> Result<Vec<Loan>, sqlx::Error> {
        sqlx::query_as::<_, Loan>(
            r#"
            SELECT id, account_id, amount_cents, loan_type, created_at
            FROM loans
            WHERE account_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(account_id)
        .fetch_all(&self.pool)
        .await
    }

    async fn save(&self, request: CreateLoanRequest) -> Result<Loan, sqlx::Error> {
        sqlx::query_as::<_, Loan>(
            r#"
            INSERT INTO loans (account_id, amount_cents, loan_type)
            VALUES ($1, $2, $3)
            RETURNING id, account_id, amount_cents, loan_type, created_at
            "#,
        )
        .bind(request.account_id)
        .bind(request.amount_cents)
        .bind(request.loan_type)
        .fetch_one(&self.pool)
        .await
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM loans WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
