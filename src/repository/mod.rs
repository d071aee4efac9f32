//! Persistence traits and their PostgreSQL implementations.
//!
//! Services depend on the traits; each binary injects the sqlx-backed
//! implementation for its own database, and tests inject in-memory fakes.

pub mod accounts;
pub mod cards;
pub mod loans;

pub use accounts::{AccountRepository, PgAccountRepository};
pub use cards::{CardRepository, PgCardRepository};
pub use loans::{LoanRepository, PgLoanRepository};
