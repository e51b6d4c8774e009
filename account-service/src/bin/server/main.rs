use std::sync::Arc;

use account_service::config::Config;
use account_service::config::StoreBackend;
use account_service::domain::user::gate::AuthorizationGate;
use account_service::domain::user::service::AuthenticationService;
use account_service::inbound::http::router::create_router;
use account_service::store::InMemoryStore;
use account_service::store::PostgresStore;
use account_service::user::ports::AuthenticationServicePort;
use account_service::user::ports::AuthorizationPort;
use account_service::user::ports::KeyValueStore;
use anyhow::Context;
use auth::Authenticator;
use auth::PasswordHasher;
use axum::Router;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "account_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "account-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        store_backend = ?config.store.backend,
        hash_cost = config.auth.hash_cost,
        token_expiration_hours = ?config.auth.token_expiration_hours,
        "Configuration loaded"
    );

    let password_hasher = PasswordHasher::with_cost(config.auth.hash_cost)?;
    tracing::debug!(t_cost = password_hasher.cost(), "Password hasher ready");
    let token_lifetime = config.auth.token_lifetime()?;
    let authenticator = Arc::new(Authenticator::with_hasher(
        config.auth.secret.as_bytes(),
        password_hasher,
    ));

    let http_application = match config.store.backend {
        StoreBackend::Memory => {
            tracing::warn!(
                store = "memory",
                "Using in-memory store, accounts are lost on restart"
            );
            build_application(Arc::new(InMemoryStore::new()), authenticator, token_lifetime)
        }
        StoreBackend::Postgres => {
            let url = config
                .store
                .url
                .as_deref()
                .context("store.url is required for the postgres backend")?;

            let pg_pool = PgPoolOptions::new()
                .max_connections(config.store.max_connections)
                .connect(url)
                .await?;
            tracing::info!(
                max_connections = config.store.max_connections,
                database = "postgresql",
                "Database connection pool created"
            );

            let store = PostgresStore::new(pg_pool);
            store.migrate().await?;
            tracing::info!(database = "postgresql", "Database migrations completed");

            build_application(Arc::new(store), authenticator, token_lifetime)
        }
    };

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    if let Err(e) = axum::serve(http_listener, http_application).await {
        tracing::error!(error = %e, "Server error");
        return Err(e.into());
    }

    tracing::info!("Server exited successfully");

    Ok(())
}

fn build_application<S>(
    store: Arc<S>,
    authenticator: Arc<Authenticator>,
    token_lifetime: Option<chrono::Duration>,
) -> Router
where
    S: KeyValueStore,
{
    let auth_service: Arc<dyn AuthenticationServicePort> = Arc::new(
        AuthenticationService::new(Arc::clone(&store), Arc::clone(&authenticator))
            .with_token_lifetime(token_lifetime),
    );
    let gate: Arc<dyn AuthorizationPort> = Arc::new(AuthorizationGate::new(store, authenticator));

    create_router(auth_service, gate)
}
