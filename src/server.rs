//! HTTP server initialization and runtime setup.
//!
//! Handles cache setup, state wiring, and the Axum server lifecycle.

use crate::config::Config;
use crate::domain::deduction::registry;
use crate::infrastructure::cache::{CacheService, MemoryCache, NullCache};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::num::NonZeroUsize;
use std::sync::Arc;

/// Builds the memoization backend for `config`.
///
/// A capacity of 0 selects [`NullCache`].
pub fn build_cache(config: &Config) -> Arc<dyn CacheService> {
    match NonZeroUsize::new(config.cache_capacity) {
        Some(capacity) => Arc::new(MemoryCache::new(capacity)),
        None => {
            tracing::info!("Cache disabled (NullCache)");
            Arc::new(NullCache::new())
        }
    }
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Provider registry (compiled once, up front)
/// - Memoization cache (LRU or NullCache)
/// - Global Prometheus recorder, scraped at `/metrics`
/// - Axum HTTP server with graceful shutdown on Ctrl+C / SIGTERM
///
/// # Errors
///
/// Returns an error if:
/// - A metrics recorder is already installed
/// - The listen address is invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    tracing::info!(providers = registry().len(), "Provider registry loaded");

    let metrics = PrometheusBuilder::new()
        .install_recorder()
        .context("Failed to install metrics recorder")?;

    let state = AppState::new(build_cache(&config), config.max_batch_size);
    let app = app_router(state, config.behind_proxy, metrics);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid LISTEN address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_build_cache_selects_backend() {
        let mut config = Config::default();
        assert_eq!(build_cache(&config).backend(), "memory");

        config.cache_capacity = 0;
        assert_eq!(build_cache(&config).backend(), "null");
    }
}
