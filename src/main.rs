// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use anyhow::Context;
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tracing_subscriber::EnvFilter;

use crate::application::channel_fetcher::ChannelFetcher;
use crate::application::dashboard_service::DashboardService;
use crate::application::dashboard_store::DashboardStore;
use crate::application::poller::spawn_poller;
use crate::infrastructure::config::load_app_config;
use crate::infrastructure::thingspeak_client::ThingSpeakClient;
use crate::presentation::app_state::AppState;
use crate::presentation::routes::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let app_config = load_app_config().context("Failed to load dashboard configuration")?;
    let endpoints = app_config.endpoints();
    tracing::info!("Loaded {} ThingSpeak channels", endpoints.len());

    // Create channel source (infrastructure layer)
    let client = Arc::new(ThingSpeakClient::new(
        app_config.thingspeak.base_url.clone(),
        Duration::from_secs(app_config.thingspeak.request_timeout_secs),
        app_config.thingspeak.results,
    )?);

    // Create services (application layer)
    let fetcher = ChannelFetcher::new(client);
    let service = DashboardService::new(fetcher, endpoints);
    let store = Arc::new(DashboardStore::new(service));
    let poller = spawn_poller(
        store.clone(),
        Duration::from_secs(app_config.poll.interval_secs),
    );

    // Build router (presentation layer)
    let router = build_router(Arc::new(AppState { store }));

    // Start server
    let addr: SocketAddr = app_config
        .server
        .bind_addr
        .parse()
        .with_context(|| format!("Invalid bind address {}", app_config.server.bind_addr))?;
    tracing::info!("Starting thingspeak-dashboard service on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    poller.shutdown().await;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
