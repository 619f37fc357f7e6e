mod admission;
mod api;
mod config;
mod handlers;
mod models;
mod routes;
mod views;

#[cfg(test)]
mod testing;

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub struct AppState {
    pub api: api::ApiClient,
}

impl AppState {
    pub fn new(config: &config::Config) -> Self {
        Self {
            api: api::ApiClient::new(config.api_base_url()),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "academy_site=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = config::Config::from_env()
        .context("Failed to load configuration")?;

    if config.backend_url.is_empty() {
        tracing::info!("BACKEND_URL not set, calling the API on the same origin ({})", config.public_origin);
    } else {
        tracing::info!("Using backend API at {}", config.backend_url);
    }

    let addr = config.bind_addr();
    let state = Arc::new(AppState::new(&config));
    let app = routes::build_router(state);

    // Start server
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
