//! Account HTTP handlers.
//!
//! This module implements the account service's API endpoints:
//! - GET /accounts - list all accounts
//! - GET /accounts/{id} - get one account
//! - GET /accounts/{id}/aggregate - account enriched with cards and loans
//! - POST /accounts, PUT /accounts - create or update an account
//! - DELETE /accounts/{id} - delete an account

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::{
    error::AppError,
    models::account::{AccountResponse, AccountView, SaveAccountRequest},
    services::AccountService,
};

/// List all accounts, newest first.
pub async fn list_accounts(
    State(service): State<Arc<AccountService>>,
) -> Result<Json<Vec<AccountResponse>>, AppError> {
    let accounts = service.list().await?;

    Ok(Json(accounts.into_iter().map(Into::into).collect()))
}

/// Get a specific account by ID.
///
/// This endpoint doubles as the existence probe the card and loan services
/// call before persisting a new record: any 2xx tells them the account is
/// real.
///
/// # Response
///
/// - **Success (200 OK)**: Returns account details
/// - **Error (404)**: Account not found
pub async fn get_account(
    State(service): State<Arc<AccountService>>,
    Path(account_id): Path<Uuid>,
) -> Result<Json<AccountResponse>, AppError> {
    Ok(Json(service.get(account_id).await?.into()))
}

/// Get an account together with its cards and loans.
///
/// # Response
///
/// - **Success (200 OK)**: The composed view. Cards and loans are fetched
///   from the peer services; a peer that cannot be reached degrades its
///   list to empty rather than failing the request.
/// - **Error (404)**: Account not found
///
/// ```json
/// {
///   "id": "550e8400-e29b-41d4-a716-446655440000",
///   "name": "Ada Lovelace",
///   "email": "ada@example.com",
///   "balance_cents": 100000,
///   "cards": [ ... ],
///   "loans": [ ... ]
/// }
/// ```
pub async fn get_account_aggregate(
    State(service): State<Arc<AccountService>>,
    Path(account_id): Path<Uuid>,
) -> Result<Json<AccountView>, AppError> {
    Ok(Json(service.aggregate(account_id).await?))
}

/// Create or update an account.
///
/// Mounted on both POST and PUT: a body carrying an `id` updates that row,
/// a body without one creates a new account.
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Ada Lovelace",
///   "email": "ada@example.com",
///   "balance_cents": 10000
/// }
/// ```
pub async fn save_account(
    State(service): State<Arc<AccountService>>,
    Json(request): Json<SaveAccountRequest>,
) -> Result<Json<AccountResponse>, AppError> {
    let account = service.save(request).await?;

    Ok(Json(account.into()))
}

/// Delete an account by ID.
///
/// Returns 204 No Content on success, 404 when the account does not exist.
/// Cards and loans referencing the account are not touched; they live in
/// other services.
pub async fn delete_account(
    State(service): State<Arc<AccountService>>,
    Path(account_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    service.delete(account_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
