//! Typed clients for the peer services.
//!
//! Each client resolves its peer through the discovery registry, joins the
//! peer's path for the call, and hands the request to the shared transport.
//! Results come back as [`PeerOutcome`](crate::peer::PeerOutcome) values;
//! nothing in here ever raises.

/// Existence probe against the account service
pub mod accounts;
/// Cards-by-account lookups against the card service
pub mod cards;
/// Loans-by-account lookups against the loan service
pub mod loans;

pub use accounts::AccountClient;
pub use cards::CardClient;
pub use loans::LoanClient;
