//! Card persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::db::DbPool;
use crate::models::card::{Card, CreateCardRequest};

/// Persistence operations for cards.
#[async_trait]
pub trait CardRepository: Send + Sync {
    /// All cards, newest first.
    async fn find_all(&self) -> Result<Vec<Card>, sqlx::Error>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Card>, sqlx::Error>;

    /// Cards owned by `account_id`, newest first.
    async fn find_by_account_id(&self, account_id: Uuid) -> Result<Vec<Card>, sqlx::Error>;

    async fn save(&self, request: CreateCardRequest) -> Result<Card, sqlx::Error>;

    /// Returns `false` when no row matched.
    async fn delete_by_id(&self, id: Uuid) -> Result<bool, sqlx::Error>;
}

/// sqlx-backed repository over the card service's database.
pub struct PgCardRepository {
    pool: DbPool,
}

impl PgCardRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CardRepository for PgCardRepository {
    async fn find_all(&self) -> Result<Vec<Card>, sqlx::Error> {
        sqlx::query_as::<_, Card>(
            r#"
            SELECT id, card_number, card_type, account_id, created_at
            FROM cards
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Card>, sqlx::Error> {
        sqlx::query_as::<_, Card>(
            r#"
            SELECT id, card_number, card_type, account_id, created_at
            FROM cards
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn find_by_account_id(&self, account_id: Uuid) -> Result<Vec<Card>, sqlx::Error> {
        sqlx::query_as::<_, Card>(
            r#"
            SELECT id, card_number, card_type, account_id, created_at
            FROM cards
            WHERE account_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(account_id)
        .fetch_all(&self.pool)
        .await
    }

    async fn save(&self, request: CreateCardRequest) -> Result<Card, sqlx::Error> {
        sqlx::query_as::<_, Card>(
            r#"
            INSERT INTO cards (card_number, card_type, account_id)
            VALUES ($1, $2, $3)
            RETURNING id, card_number, card_type, account_id, created_at
            "#,
        )
        .bind(request.card_number)
        .bind(request.card_type)
        .bind(request.account_id)
        .fetch_one(&self.pool)
        .await
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cards WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
