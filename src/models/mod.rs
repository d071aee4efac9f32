//! Data models: database rows plus the request/response shapes exchanged
//! over HTTP.
//!
//! Each entity keeps its row type separate from its wire DTO; the DTOs are
//! also what the peer clients decode when one service reads another's data.

/// Account entity and the aggregate view
pub mod account;
/// Card entity
pub mod card;
/// Loan entity
pub mod loan;
