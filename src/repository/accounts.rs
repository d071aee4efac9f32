//! Account persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::db::DbPool;
use crate::models::account::{Account, SaveAccountRequest};

/// Persistence operations for accounts.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// All accounts, newest first.
    async fn find_all(&self) -> Result<Vec<Account>, sqlx::Error>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, sqlx::Error>;

    /// Insert, or update in place when the request carries an id.
    async fn save(&self, request: SaveAccountRequest) -> Result<Account, sqlx::Error>;

    /// Returns `false` when no row matched.
    async fn delete_by_id(&self, id: Uuid) -> Result<bool, sqlx::Error>;
}

/// sqlx-backed repository over the account service's database.
pub struct PgAccountRepository {
    pool: DbPool,
}

impl PgAccountRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountRepository for PgAccountRepository {
    async fn find_all(&self) -> Result<Vec<Account>, sqlx::Error> {
        sqlx::query_as::<_, Account>(
            r#"
            SELECT id, name, email, balance_cents, created_at, updated_at
            FROM accounts
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, sqlx::Error> {
        sqlx::query_as::<_, Account>(
            r#"
            SELECT id, name, email, balance_cents, created_at, updated_at
            FROM accounts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn save(&self, request: SaveAccountRequest) -> Result<Account, sqlx::Error> {
        match request.id {
            // Upsert keeps save() a single round trip whether the row
            // exists or not
            Some(id) => {
                sqlx::query_as::<_, Account>(
                    r#"
                    INSERT INTO accounts (id, name, email, balance_cents)
                    VALUES ($1, $2, $3, $4)
                    ON CONFLICT (id) DO UPDATE
                    SET name = EXCLUDED.name,
                        email = EXCLUDED.email,
                        balance_cents = EXCLUDED.balance_cents,
                        updated_at = NOW()
                    RETURNING id, name, email, balance_cents, created_at, updated_at
                    "#,
                )
                .bind(id)
                .bind(request.name)
                .bind(request.email)
                .bind(request.balance_cents)
                .fetch_one(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, Account>(
                    r#"
                    INSERT INTO accounts (name, email, balance_cents)
                    VALUES ($1, $2, $3)
                    RETURNING id, name, email, balance_cents, created_at, updated_at
                    "#,
                )
                .bind(request.name)
                .bind(request.email)
                .bind(request.balance_cents)
                .fetch_one(&self.pool)
                .await
            }
        }
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        // No cascade: cards and loans live in other services' databases
        let result = sqlx::query("DELETE FROM accounts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
