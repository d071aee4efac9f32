//! Loan HTTP handlers.
//!
//! Same shape as the card endpoints:
//! - GET /loans - list all loans
//! - GET /loans/{id} - get one loan
//! - GET /loans/accounts/{account_id} - loans owned by an account
//! - POST /loans - create a loan (account existence gated)
//! - DELETE /loans/{id} - delete a loan

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::{
    error::AppError,
    models::loan::{CreateLoanRequest, LoanResponse},
    services::LoanService,
};

/// List all loans, newest first.
pub async fn list_loans(
    State(service): State<Arc<LoanService>>,
) -> Result<Json<Vec<LoanResponse>>, AppError> {
    let loans = service.list().await?;

    Ok(Json(loans.into_iter().map(Into::into).collect()))
}

/// Get a specific loan by ID. 404 when absent.
pub async fn get_loan(
    State(service): State<Arc<LoanService>>,
    Path(loan_id): Path<Uuid>,
) -> Result<Json<LoanResponse>, AppError> {
    Ok(Json(service.get(loan_id).await?.into()))
}

/// List the loans owned by an account.
///
/// Consumed by the account service's aggregate view. No remote check; an
/// unknown account yields an empty array.
pub async fn list_loans_by_account(
    State(service): State<Arc<LoanService>>,
    Path(account_id): Path<Uuid>,
) -> Result<Json<Vec<LoanResponse>>, AppError> {
    let loans = service.by_account(account_id).await?;

    Ok(Json(loans.into_iter().map(Into::into).collect()))
}

/// Create a new loan.
///
/// The owning account is checked against the account service before
/// anything is persisted; 404 when the owner is missing, 503 when the
/// account service gave no answer.
pub async fn create_loan(
    State(service): State<Arc<LoanService>>,
    Json(request): Json<CreateLoanRequest>,
) -> Result<(StatusCode, Json<LoanResponse>), AppError> {
    let loan = service.create(request).await?;

    Ok((StatusCode::CREATED, Json(loan.into())))
}

/// Delete a loan by ID. 204 on success, 404 when absent.
pub async fn delete_loan(
    State(service): State<Arc<LoanService>>,
    Path(loan_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    service.delete(loan_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
