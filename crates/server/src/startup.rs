use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use configs::{AppConfig, IdScheme};
use service::{CustomerId, CustomerStore};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::StartupError;
use crate::routes;
use crate::state::AppState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn load_bind_addr(cfg: &AppConfig) -> Result<SocketAddr, StartupError> {
    let raw = cfg.server.bind_addr();
    raw.parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bind address `{raw}`: {e}")))
}

/// Build the one store of this process, seeded when configured.
pub fn build_store<K: CustomerId>(seed: bool) -> Arc<CustomerStore<K>> {
    if seed {
        CustomerStore::seeded()
    } else {
        CustomerStore::empty()
    }
}

/// Router for a store keyed by `K`, with CORS and tracing layers.
pub fn build_app<K: CustomerId>(cfg: &AppConfig) -> Router {
    let store = build_store::<K>(cfg.store.seed);
    routes::build_router(AppState::new(store), build_cors(), &cfg.server.frontend_dir)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for Ctrl+C; running until killed");
        std::future::pending::<()>().await;
    }
    info!("received Ctrl+C, shutting down");
}

async fn serve<K: CustomerId>(cfg: AppConfig) -> anyhow::Result<()> {
    let addr = load_bind_addr(&cfg)?;
    let app = build_app::<K>(&cfg);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind { addr: addr.to_string(), source })?;
    info!(%addr, scheme = K::SCHEME, seed = cfg.store.seed, "customer server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

/// Serve with a loaded configuration. Logging must be set up by the caller.
pub async fn run_with_config(cfg: AppConfig) -> anyhow::Result<()> {
    common::env::ensure_env(&cfg.server.frontend_dir).await?;
    match cfg.store.id_scheme {
        IdScheme::Sequential => serve::<i64>(cfg).await,
        IdScheme::Uuid => serve::<Uuid>(cfg).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_addr_from_defaults() {
        let cfg = AppConfig::default();
        let addr = load_bind_addr(&cfg).unwrap();
        assert_eq!(addr.to_string(), "127.0.0.1:3000");
    }

    #[test]
    fn bad_host_is_invalid_config() {
        let mut cfg = AppConfig::default();
        cfg.server.host = "not a host".into();
        assert!(matches!(load_bind_addr(&cfg), Err(StartupError::InvalidConfig(_))));
    }

    #[tokio::test]
    async fn unseeded_store_starts_empty() {
        let store = build_store::<i64>(false);
        assert_eq!(store.len().await, 0);
        let store = build_store::<Uuid>(true);
        assert_eq!(store.len().await, 5);
    }
}
