//! We Scale Smiles Static Server
//!
//! Axum-based host for the compiled landing page. Serves the wasm bundle and
//! a health check; there is no lead intake endpoint.

mod config;
mod handlers;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment
    dotenvy::dotenv().ok();

    let config = ServerConfig::from_env();

    if config.index_file().is_file() {
        tracing::info!("Serving site from {}", config.site_dir.display());
    } else {
        tracing::warn!("No index.html in {}", config.site_dir.display());
        tracing::warn!("  Build the frontend first: trunk build --release (in crates/smiles-web)");
    }

    match smiles_core::SiteConfig::from_env() {
        Ok(site) => {
            if let Some(endpoint) = site.leads_endpoint() {
                tracing::info!("Lead backend {} is configured but unused", endpoint);
            }
        }
        Err(e) => tracing::warn!("Ignoring backend URL: {}", e),
    }

    let app = handlers::router(&config);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("We Scale Smiles running on http://{}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
