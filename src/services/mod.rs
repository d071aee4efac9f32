//! Business logic services.
//!
//! Each service owns the use cases for its entity and receives its
//! repository and peer clients through the constructor; handlers stay free
//! of persistence and transport concerns.

pub mod account_service;
pub mod card_service;
pub mod loan_service;

pub use account_service::AccountService;
pub use card_service::CardService;
pub use loan_service::LoanService;
