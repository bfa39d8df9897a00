use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::http::HeaderValue;
use tracing::{info, warn};

use invex_api::{build_router, AppState};
use invex_infrastructure::Store;
use invex_security::JwtService;
use invex_shared::{config::AppConfig, telemetry::init_telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration (.env is read inside)
    let config = AppConfig::load().context("failed to load configuration")?;

    // Initialize telemetry
    init_telemetry(&config.log)?;

    info!("{} starting in {} mode...", config.app.name, config.app.env);
    if !config.auth.require_token {
        warn!("Product routes are open; set auth.require_token = true to enforce bearer tokens");
    }

    // Open the store
    let store = Store::from_settings(&config.database)
        .await
        .context("failed to open the store")?;

    let jwt_service = Arc::new(JwtService::new(
        &config.jwt.secret,
        config.jwt.access_token_expiry,
    ));

    // Create App State
    let state = AppState::new(
        store.users,
        store.products,
        jwt_service,
        config.auth.require_token,
    );

    let allowed_origin: HeaderValue = config
        .cors
        .allowed_origin
        .parse()
        .context("cors.allowed_origin is not a valid header value")?;

    // Build router
    let app = build_router(state, allowed_origin);

    // Bind address
    let host: std::net::IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));
    info!("Listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
