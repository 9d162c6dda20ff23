//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Startup, handlers, upstream binding
//!     → tracing events with structured fields (request_id, username, code)
//!     → logging.rs subscriber (pretty or JSON) → stdout
//!
//! Per-request spans come from tower_http's TraceLayer.
//! ```

pub mod logging;

pub use logging::init_logging;
