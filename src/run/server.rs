use anyhow::{Context, Result};

use crate::config::Config;
use crate::db::Database;
use crate::web::{app_router, AppState};

pub(crate) fn as_server(db: Database, config: &Config) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    runtime.block_on(serve(db, config))
}

async fn serve(db: Database, config: &Config) -> Result<()> {
    let router = app_router(AppState::new(db));
    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.listen_addr))?;
    tracing::info!("Listening on http://{}", config.listen_addr);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}
