//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with its single route
//! - Wire up request ids and request tracing
//! - Serve on a bound listener until shutdown

use std::future::Future;
use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::HandlerConfig;
use crate::http::handlers::get_user_details;
use crate::http::request::{propagate_request_id_layer, set_request_id_layer};
use crate::upstream::UserDirectory;

pub const USER_DETAILS_PATH: &str = "/get-user-details";

/// Application state injected into handlers.
///
/// Built once at startup and shared read-only by every request.
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<dyn UserDirectory>,
    fallback_username: Option<Arc<str>>,
}

impl AppState {
    pub fn new(directory: Arc<dyn UserDirectory>, handler: &HandlerConfig) -> Self {
        Self {
            directory,
            fallback_username: handler.fallback().map(Arc::from),
        }
    }

    pub fn fallback_username(&self) -> Option<&str> {
        self.fallback_username.as_deref()
    }
}

/// Build the router: `GET /get-user-details` and nothing else.
pub fn setup_router(state: AppState) -> Router {
    Router::new()
        .route(USER_DETAILS_PATH, get(get_user_details))
        .with_state(state)
        .layer(propagate_request_id_layer())
        .layer(TraceLayer::new_for_http())
        .layer(set_request_id_layer())
}

/// HTTP server for the gateway.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    pub fn new(state: AppState) -> Self {
        Self {
            router: setup_router(state),
        }
    }

    /// Run the server until `shutdown` resolves, then drain in-flight requests.
    pub async fn run<F>(self, listener: TcpListener, shutdown: F) -> Result<(), std::io::Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.await;
                tracing::info!("HTTP server draining");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
