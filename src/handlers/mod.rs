//! HTTP request handlers (route handlers).
//!
//! Handlers stay thin: extract request data, call the service layer,
//! convert the result to JSON. Each binary mounts only its own entity's
//! routes plus `/health`.

/// Account endpoints
pub mod accounts;
/// Card endpoints
pub mod cards;
/// Health check endpoint
pub mod health;
/// Loan endpoints
pub mod loans;
