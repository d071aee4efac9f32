//! Bank services - shared library for the account, card and loan services.
//!
//! Three small CRUD services are built from this crate; each binary under
//! `src/bin` wires its own router, database pool, repository and peer
//! clients from the modules here.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Database**: PostgreSQL with sqlx (async queries), one database per
//!   service
//! - **Peer calls**: reqwest behind an injectable transport; peer instances
//!   are resolved from a discovery registry at call time
//! - **Format**: JSON requests/responses

pub mod clients;
pub mod config;
pub mod db;
pub mod discovery;
pub mod error;
pub mod handlers;
pub mod models;
pub mod peer;
pub mod repository;
pub mod services;
