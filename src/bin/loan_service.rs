//! Loan Service - Main Application Entry Point
//!
//! Exposes CRUD on loans; mirrors the card service, including the account
//! existence gate on creation.

use std::sync::Arc;

use axum::{
    Router,
    routing::{delete, get, post},
};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use bank_services::{
    clients::AccountClient,
    config::Config,
    db,
    discovery::{FirstInstance, HttpRegistry, PeerResolver},
    handlers,
    peer::{HttpTransport, ReqwestTransport},
    repository::PgLoanRepository,
    services::LoanService,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    let pool = db::create_pool(&config.database_url).await?;
    sqlx::migrate!("migrations/loan").run(&pool).await?;
    tracing::info!("Database ready");

    let registry = Arc::new(HttpRegistry::new(config.discovery_url.parse()?)?);
    let resolver = Arc::new(PeerResolver::new(registry, Box::new(FirstInstance)));
    let transport: Arc<dyn HttpTransport> = Arc::new(ReqwestTransport::new()?);

    let service = Arc::new(LoanService::new(
        Arc::new(PgLoanRepository::new(pool.clone())),
        AccountClient::new(resolver, transport),
    ));

    let app = Router::new()
        .route("/loans", get(handlers::loans::list_loans))
        .route("/loans", post(handlers::loans::create_loan))
        .route("/loans/{id}", get(handlers::loans::get_loan))
        .route(
            "/loans/accounts/{account_id}",
            get(handlers::loans::list_loans_by_account),
        )
        .route("/loans/{id}", delete(handlers::loans::delete_loan))
        .with_state(service)
        .merge(
            Router::new()
                .route("/health", get(handlers::health::health_check))
                .with_state(pool),
        )
        .layer(TraceLayer::new_for_http());

    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Loan service listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
