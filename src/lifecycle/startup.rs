//! Startup orchestration.
//!
//! Order: configuration → user service channel → application state →
//! router → listener.
//! The listener binds last, so no request is accepted before the channel
//! exists. Errors are returned, never handled here; `main` decides to exit.

use std::future::Future;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::{load_or_default, ConfigError, GatewayConfig};
use crate::http::{AppState, HttpServer};
use crate::upstream::{GrpcUserDirectory, UpstreamError, UserDirectory};

/// Errors that abort startup.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to connect to user service: {0}")]
    Upstream(#[from] UpstreamError),

    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },
}

/// A fully initialized gateway, bound and ready to serve.
pub struct Gateway {
    server: HttpServer,
    listener: TcpListener,
}

impl Gateway {
    /// Address the listener is bound to.
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Serve until `shutdown` resolves.
    pub async fn run<F>(self, shutdown: F) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.server.run(self.listener, shutdown).await
    }
}

/// Load the configuration file, or the defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<GatewayConfig, StartupError> {
    Ok(load_or_default(path)?)
}

/// Run the startup sequence against the real user service.
pub async fn start(config: &GatewayConfig) -> Result<Gateway, StartupError> {
    let directory = GrpcUserDirectory::initialize(&config.upstream)?;
    start_with_directory(config, Arc::new(directory)).await
}

/// Run the startup sequence with an already-built directory.
pub async fn start_with_directory(
    config: &GatewayConfig,
    directory: Arc<dyn UserDirectory>,
) -> Result<Gateway, StartupError> {
    let state = AppState::new(directory, &config.handler);
    let server = HttpServer::new(state);

    let bind_error = |source| StartupError::Bind {
        address: config.listener.bind_address.clone(),
        source,
    };
    let listener = TcpListener::bind(&config.listener.bind_address)
        .await
        .map_err(bind_error)?;
    let local_addr = listener.local_addr().map_err(bind_error)?;

    tracing::info!(address = %local_addr, "Listening for connections");

    Ok(Gateway { server, listener })
}
