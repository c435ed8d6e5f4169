use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod catalog;
mod config;
mod rest;

use catalog::PlanCatalog;
use config::ServerConfig;
use rest::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env()?;

    let catalog = match &config.plans_file {
        Some(path) => PlanCatalog::from_file(path)?,
        None => {
            info!("SAVINGS_PLANS_FILE not set, serving the built-in catalog");
            PlanCatalog::builtin()
        }
    };
    if catalog.is_empty() {
        warn!("Plan catalog is empty, the dashboard will list no plans");
    }

    let app = rest::app(AppState::new(catalog), &config)?;

    info!("Starting server on {}", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("Listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
