//! Card data models and API request/response types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a card record from the database.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Card {
    /// Unique identifier for this card
    pub id: Uuid,

    /// Card number as issued (stored verbatim)
    pub card_number: String,

    /// Card product type, e.g. "DEBIT" or "CREDIT"
    pub card_type: String,

    /// Owning account, held as a plain id: the account lives in the account
    /// service's database, so there is no foreign key to it here.
    pub account_id: Uuid,

    /// Timestamp when card was created
    pub created_at: DateTime<Utc>,
}

/// Request body for creating a new card.
///
/// # JSON Example
///
/// ```json
/// {
///   "card_number": "4000 1234 5678 9010",
///   "card_type": "DEBIT",
///   "account_id": "550e8400-e29b-41d4-a716-446655440000"
/// }
/// ```
///
/// The owning account must exist according to the account service; creation
/// is rejected otherwise.
#[derive(Debug, Deserialize)]
pub struct CreateCardRequest {
    pub card_number: String,
    pub card_type: String,
    pub account_id: Uuid,
}

/// Wire shape for a card.
///
/// Returned by the card service's endpoints, and decoded by the account
/// service when it asks for an account's cards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardResponse {
    pub id: Uuid,
    pub card_number: String,
    pub card_type: String,
    pub account_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<Card> for CardResponse {
    fn from(card: Card) -> Self {
        Self {
            id: card.id,
            card_number: card.card_number,
            card_type: card.card_type,
            account_id: card.account_id,
            created_at: card.created_at,
        }
    }
}
