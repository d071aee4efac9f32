//! Card HTTP handlers.
//!
//! This module implements the card service's API endpoints:
//! - GET /cards - list all cards
//! - GET /cards/{id} - get one card
//! - GET /cards/accounts/{account_id} - cards owned by an account
//! - POST /cards - create a card (account existence gated)
//! - DELETE /cards/{id} - delete a card

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::{
    error::AppError,
    models::card::{CardResponse, CreateCardRequest},
    services::CardService,
};

/// List all cards, newest first.
pub async fn list_cards(
    State(service): State<Arc<CardService>>,
) -> Result<Json<Vec<CardResponse>>, AppError> {
    let cards = service.list().await?;

    Ok(Json(cards.into_iter().map(Into::into).collect()))
}

/// Get a specific card by ID.
///
/// # Response
///
/// - **Success (200 OK)**: Returns card details
/// - **Error (404)**: Card not found
pub async fn get_card(
    State(service): State<Arc<CardService>>,
    Path(card_id): Path<Uuid>,
) -> Result<Json<CardResponse>, AppError> {
    Ok(Json(service.get(card_id).await?.into()))
}

/// List the cards owned by an account.
///
/// This is the surface the account service consumes when composing its
/// aggregate view. No remote check is made here; an unknown account yields
/// an empty array.
pub async fn list_cards_by_account(
    State(service): State<Arc<CardService>>,
    Path(account_id): Path<Uuid>,
) -> Result<Json<Vec<CardResponse>>, AppError> {
    let cards = service.by_account(account_id).await?;

    Ok(Json(cards.into_iter().map(Into::into).collect()))
}

/// Create a new card.
///
/// The owning account is checked against the account service before
/// anything is persisted.
///
/// # Response
///
/// - **Success (201 Created)**: Returns the created card
/// - **Error (404)**: The account service says the owner does not exist
/// - **Error (503)**: The account service could not be reached; retry once
///   it is back
pub async fn create_card(
    State(service): State<Arc<CardService>>,
    Json(request): Json<CreateCardRequest>,
) -> Result<(StatusCode, Json<CardResponse>), AppError> {
    let card = service.create(request).await?;

    Ok((StatusCode::CREATED, Json(card.into())))
}

/// Delete a card by ID.
///
/// Returns 204 No Content on success, 404 when the card does not exist.
/// The owning account is not consulted.
pub async fn delete_card(
    State(service): State<Arc<CardService>>,
    Path(card_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    service.delete(card_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
