use anyhow::Context;
use refmorph::{
    backend::BackendClient,
    build_router,
    config::Config,
    ui::{HttpCreativeApi, PageRenderer},
    AppState,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Init tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let config = Config::from_env().context("invalid configuration")?;
    tracing::info!(
        "Forwarding creatives to {} (timeout {:?}, {} retries)",
        config.backend.base_url,
        config.backend.timeout,
        config.backend.max_retries
    );

    let backend = BackendClient::new(config.backend.clone()).context("failed to build backend client")?;
    let pages = PageRenderer::new().context("failed to load page templates")?;
    let state = AppState {
        backend: Arc::new(backend),
        pages: Arc::new(pages),
        creative_api: Arc::new(HttpCreativeApi::new(&config.proxy_url)),
    };

    let app = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "Starting server");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
