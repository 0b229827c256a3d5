//! Customer registration API server.
//!
//! Reads its configuration from the environment (a `.env` file is
//! honored), picks the storage backend and serves the JSON API.

use anyhow::Context;
use clientes_api::config::ApiConfig;
use clientes_api::routes::router;
use clientes_api::state::{AppState, Repository, Resolver};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ApiConfig::from_env()?;
    let repository = Repository::from_config(&config);
    let backend = repository.backend();
    let state = AppState::new(repository, Resolver::from_config(&config));

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("não foi possível escutar em {addr}"))?;
    info!(%addr, backend, "servidor de clientes no ar");

    axum::serve(listener, router(state)).await?;
    Ok(())
}
