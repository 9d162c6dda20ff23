//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Config → user service channel → router → bind listener
//!
//! Shutdown (signals.rs → Gateway::run):
//!     SIGTERM/SIGINT → stop accepting → drain in-flight requests → exit
//! ```
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal, decided in main
//! - Listener binds last (traffic only when ready)

pub mod signals;
pub mod startup;

pub use startup::{load_config, start, start_with_directory, Gateway, StartupError};
