//! HTTP server initialization and runtime setup.
//!
//! Builds the submit strategy and login service, then runs the Axum server.

use crate::application::services::LoginService;
use crate::config::{Config, SubmitMode};
use crate::domain::SubmitStrategy;
use crate::infrastructure::submit::{LocalSubmit, RemoteAuthClient};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Builds the submit strategy selected by the configuration.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built.
pub fn build_strategy(config: &Config) -> Result<Arc<dyn SubmitStrategy>> {
    let strategy: Arc<dyn SubmitStrategy> = match config.submit_mode {
        SubmitMode::Local => {
            tracing::info!("Submissions are handled locally");
            Arc::new(LocalSubmit::new())
        }
        SubmitMode::Remote => {
            let client = RemoteAuthClient::with_timeout(
                config.auth_endpoint.clone(),
                Duration::from_secs(config.auth_timeout_seconds),
            )
            .context("Failed to build HTTP client")?;
            tracing::info!("Submissions are sent to {}", client.endpoint());
            Arc::new(client)
        }
    };

    Ok(strategy)
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Submit strategy (local or remote)
/// - Login service and shared state
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - The HTTP client cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let strategy = build_strategy(&config)?;
    let login_service = Arc::new(LoginService::new(strategy, config.identifier_kind));

    let state = AppState::new(login_service);

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}/login");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl+C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
