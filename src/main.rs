//! User gateway
//!
//! ```text
//!     Client                 ┌──────────────────────────────────────┐
//!     GET /get-user-details  │             USER GATEWAY             │
//!     ───────────────────────┼─▶ http::server ─▶ http::handlers ────┼──▶ auth.v1.UserService
//!     ◀──────────────────────┼── JSON body    ◀── upstream client ◀─┼───  (gRPC, plaintext)
//!                            └──────────────────────────────────────┘
//! ```
//!
//! Startup is fail-fast: a bad configuration or an unusable user service
//! address ends the process before the listener binds.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use user_gateway::config::ObservabilityConfig;
use user_gateway::lifecycle::{self, signals};
use user_gateway::observability::init_logging;

#[derive(Parser)]
#[command(name = "user-gateway")]
#[command(about = "HTTP/JSON gateway for the gRPC user service", long_about = None)]
struct Cli {
    /// TOML configuration file; built-in defaults apply when omitted.
    #[arg(short, long, env = "USER_GATEWAY_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match lifecycle::load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            init_logging(&ObservabilityConfig::default());
            tracing::error!(error = %e, "Failed to load configuration");
            return Ok(ExitCode::FAILURE);
        }
    };

    init_logging(&config.observability);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "user-gateway starting");

    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.endpoint,
        fallback_username = ?config.handler.fallback(),
        "Configuration loaded"
    );

    let gateway = match lifecycle::start(&config).await {
        Ok(gateway) => gateway,
        Err(e) => {
            tracing::error!(error = %e, "Startup failed");
            return Ok(ExitCode::FAILURE);
        }
    };

    gateway.run(signals::wait_for_signal()).await?;

    tracing::info!("Shutdown complete");
    Ok(ExitCode::SUCCESS)
}
