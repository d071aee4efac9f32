//! Card Service - Main Application Entry Point
//!
//! Exposes CRUD on cards. Creation is gated on the owning account existing
//! according to the account service, resolved via discovery.

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
    repository::PgCardRepository,
    services::CardService,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    let pool = db::create_pool(&config.database_url).await?;
    sqlx::migrate!("migrations/card").run(&pool).await?;
    tracing::info!("Database ready");

    let registry = Arc::new(HttpRegistry::new(config.discovery_url.parse()?)?);
    let resolver = Arc::new(PeerResolver::new(registry, Box::new(FirstInstance)));
    let transport: Arc<dyn HttpTransport> = Arc::new(ReqwestTransport::new()?);

    let service = Arc::new(CardService::new(
        Arc::new(PgCardRepository::new(pool.clone())),
        AccountClient::new(resolver, transport),
    ));

    let app = Router::new()
        .route("/cards", get(handlers::cards::list_cards))
        .route("/cards", post(handlers::cards::create_card))
        .route("/cards/{id}", get(handlers::cards::get_card))
        .route(
            "/cards/accounts/{account_id}",
            get(handlers::cards::list_cards_by_account),
        )
        .route("/cards/{id}", delete(handlers::cards::delete_card))
        .with_state(service)
        .merge(
            Router::new()
                .route("/health", get(handlers::health::health_check))
                .with_state(pool),
        )
        .layer(TraceLayer::new_for_http());

    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Card service listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
