//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! --config file (TOML), or built-in defaults
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → GatewayConfig (validated, immutable)
//!     → consumed once by the startup sequence
//! ```
//!
//! # Design Decisions
//! - All fields have defaults; no file reproduces the fixed ports
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_or_default, ConfigError};
pub use schema::{
    GatewayConfig, HandlerConfig, ListenerConfig, LogFormat, ObservabilityConfig, UpstreamConfig,
};
