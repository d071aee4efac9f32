//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application-wide error type, shared by all three services.
///
/// # Error Categories
///
/// - **Database Errors**: Any sqlx::Error from database operations
/// - **Resource Errors**: Requested resources not found
/// - **Peer Errors**: A peer service could not be reached when the
///   operation required an answer from it
/// - **Validation Errors**: Invalid request data
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Database operation failed (e.g., connection error, query error).
    ///
    /// This wraps any sqlx::Error using the `#[from]` attribute, which
    /// automatically implements `From<sqlx::Error> for AppError`.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Requested account does not exist.
    ///
    /// Also raised by the card and loan services when the remote existence
    /// probe establishes that the owning account is missing.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("Account not found")]
    AccountNotFound,

    /// Requested card does not exist.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("Card not found")]
    CardNotFound,

    /// Requested loan does not exist.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("Loan not found")]
    LoanNotFound,

    /// A peer service could not be reached (or resolved) while handling an
    /// operation that cannot proceed without it.
    ///
    /// Kept apart from the not-found variants so "resource missing" and
    /// "peer down" stay distinguishable to callers.
    ///
    /// Returns HTTP 503 Service Unavailable.
    #[error("{0} is unavailable")]
    PeerUnavailable(&'static str),

    /// Request body or parameters are invalid.
    ///
    /// Returns HTTP 400 Bad Request.
    /// The String contains details about what was invalid.
    #[error("Invalid request")]
    InvalidRequest(String),
}

/// Convert AppError into an HTTP response.
///
/// This implementation allows Axum handlers to return `Result<T, AppError>`
/// and have errors automatically converted to proper HTTP responses.
///
/// # Response Format
///
/// All errors return JSON in this format:
/// ```json
/// {
///   "error": {
///     "code": "error_type",
///     "message": "Human-readable error message"
///   }
/// }
/// ```
///
/// # Status Code Mapping
///
/// - `AccountNotFound` / `CardNotFound` / `LoanNotFound` → 404 Not Found
/// - `PeerUnavailable` → 503 Service Unavailable
/// - `InvalidRequest` → 400 Bad Request
/// - `Database` → 500 Internal Server Error (hides details from client)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map each error variant to (HTTP status, error code, message)
        let (status, code, message) = match self {
            AppError::AccountNotFound => {
                (StatusCode::NOT_FOUND, "account_not_found", self.to_string())
            }
            AppError::CardNotFound => (StatusCode::NOT_FOUND, "card_not_found", self.to_string()),
            AppError::LoanNotFound => (StatusCode::NOT_FOUND, "loan_not_found", self.to_string()),
            AppError::PeerUnavailable(_) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "peer_unavailable",
                self.to_string(),
            ),
            AppError::InvalidRequest(ref msg) => {
                (StatusCode::BAD_REQUEST, "invalid_request", msg.clone())
            }
            AppError::Database(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "An internal error occurred".to_string(),
            ),
        };

        // Build JSON response body
        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        // Return the response with status code and JSON body
        (status, body).into_response()
    }
}
