//! HTTP server initialization and runtime setup.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;

use crate::client::HttpLinksApi;
use crate::config::Config;
use crate::routes::app_router;
use crate::state::AppState;

/// Runs the HTTP server with the given configuration.
///
/// Initializes the backend API client, shared state, and the Axum server.
///
/// # Errors
///
/// Returns an error if the client fails to build, the bind fails, or a
/// server runtime error occurs.
pub async fn run(config: Config) -> Result<()> {
    let timeout = Duration::from_secs(config.http_timeout_seconds);
    let api = HttpLinksApi::new(&config.backend_url, timeout)?;
    tracing::info!("Backend client ready for {}", config.backend_url);

    let state = AppState::new(Arc::new(api), config.short_base());

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
