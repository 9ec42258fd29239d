//! # Registry Server Entry Point
//!
//! Wires configuration, the store, the identity gate, and the router,
//! then serves until shutdown.

use std::sync::Arc;

use opm_api::{ApiConfig, AppState};
use opm_auth::{AdminList, GithubProvider, IdentityGate};
use opm_store::MemoryStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = ApiConfig::from_env()?;

    let store = Arc::new(MemoryStore::new());
    let provider = GithubProvider::new(&config.github_api_url, config.provider_timeout)?;
    let gate = IdentityGate::new(
        Arc::new(provider),
        Arc::new(AdminList::new(config.admin_logins.iter().cloned())),
    );
    let app = opm_api::app(AppState::new(store, gate));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "registry API listening");
    axum::serve(listener, app).await?;
    Ok(())
}
