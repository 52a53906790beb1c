use anyhow::{Context, Result};
use dotenv::dotenv;
use pokeroster_rust_core::{PokeApiClient, RosterService, TeamStore};
use roster_service_rust::{router, RosterServiceConfig};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting roster service...");

    // Config
    let config = RosterServiceConfig::from_env().context("Failed to load configuration")?;
    let addr = config.bind_addr()?;

    // Clients
    let catalog = Arc::new(PokeApiClient::with_config(config.pokeapi()));
    info!(
        "Catalog source: {} (limit {})",
        config.pokeapi_base_url, config.pokeapi_limit
    );

    // Team state lives for the lifetime of the process
    let service = Arc::new(RosterService::new(catalog, Arc::new(TeamStore::new())));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Listening on {}", addr);

    axum::serve(listener, router(service))
        .await
        .context("HTTP server error")?;

    Ok(())
}
