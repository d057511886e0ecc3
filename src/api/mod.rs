//! HTTP API served by the `serve` command

pub mod handler;
pub mod routes;

use crate::{
    error::{AppError, Result},
    utils::env::BuildInfo,
};
use std::{future::Future, net::SocketAddr, time::Instant};
use tokio::net::TcpListener;
use tracing::info;

pub use routes::{Endpoint, build_router, endpoints};

/// Shared state handed to every handler
#[derive(Debug, Clone)]
pub struct AppState {
    pub started: Instant,
    pub build: BuildInfo,
}

impl AppState {
    pub fn new(build: BuildInfo) -> Self {
        Self {
            started: Instant::now(),
            build,
        }
    }
}

/// Serve the API on `listener` until `shutdown` resolves
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener
        .local_addr()
        .map_err(|e| AppError::server("failed to read listener address", e))?;

    info!("Registered routes:");
    for endpoint in endpoints() {
        info!("{}: {}", endpoint.path, endpoint.method);
    }

    info!("Starting server on {}", addr);
    let app = build_router(state).into_make_service_with_connect_info::<SocketAddr>();
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| AppError::server(format!("server on {addr} failed"), e))?;

    info!("Server on {} stopped", addr);
    Ok(())
}
