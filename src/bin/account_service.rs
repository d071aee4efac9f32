//! Account Service - Main Application Entry Point
//!
//! Exposes CRUD on accounts plus the aggregate view that pulls an
//! account's cards and loans from the peer services.
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Create the database pool and run this service's migrations
//! 3. Wire the repository, discovery resolver and peer clients
//! 4. Build the HTTP router and start serving

use std::sync::Arc;

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use bank_services::{
    clients::{CardClient, LoanClient},
    config::Config,
    db,
    discovery::{FirstInstance, HttpRegistry, PeerResolver},
    handlers,
    peer::{HttpTransport, ReqwestTransport},
    repository::PgAccountRepository,
    services::AccountService,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with tracing subscriber. Reads RUST_LOG environment variable (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    // Create database pool and run migrations
    let pool = db::create_pool(&config.database_url).await?;
    sqlx::migrate!("migrations/account").run(&pool).await?;
    tracing::info!("Database ready");

    // Wire discovery and the peer clients
    let registry = Arc::new(HttpRegistry::new(config.discovery_url.parse()?)?);
    let resolver = Arc::new(PeerResolver::new(registry, Box::new(FirstInstance)));
    let transport: Arc<dyn HttpTransport> = Arc::new(ReqwestTransport::new()?);

    let service = Arc::new(AccountService::new(
        Arc::new(PgAccountRepository::new(pool.clone())),
        CardClient::new(resolver.clone(), transport.clone()),
        LoanClient::new(resolver, transport),
    ));

    // Account routes share the service; /health only needs the pool
    let app = Router::new()
        .route("/accounts", get(handlers::accounts::list_accounts))
        .route("/accounts", post(handlers::accounts::save_account))
        .route("/accounts", put(handlers::accounts::save_account))
        .route("/accounts/{id}", get(handlers::accounts::get_account))
        .route(
            "/accounts/{id}/aggregate",
            get(handlers::accounts::get_account_aggregate),
        )
        .route("/accounts/{id}", delete(handlers::accounts::delete_account))
        .with_state(service)
        .merge(
            Router::new()
                .route("/health", get(handlers::health::health_check))
                .with_state(pool),
        )
        // Add distributed tracing middleware for observability
        .layer(TraceLayer::new_for_http());

    // Bind to network address and start server
    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Account service listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
