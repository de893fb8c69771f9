use anyhow::Context;
use tracing::info;

use product_api::{build_router, config::Config, shutdown::shutdown_signal, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (ignored in production where env vars are injected)
    dotenv::dotenv().ok();

    // Structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,product_api=debug")),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;
    let addr = config.bind_addr();

    info!("╔══════════════════════════════════════╗");
    info!("║  Product API  — Rust + Axum          ║");
    info!("╚══════════════════════════════════════╝");

    // Catalogue is generated before the listener exists and never changes.
    let state = AppState::new(config);
    info!(
        products = state.products.len(),
        health_checks = state.health.len(),
        environment = ?state.config.environment,
        "Application state ready"
    );

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Listening on http://{}", addr);
    info!("Try: GET http://{}/products  ·  GET http://{}/healthz/liveness", addr, addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}
