//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, request id + trace layers)
//!     → handlers.rs (query → user service call)
//!     → response.rs (UserDetails / ErrorBody JSON)
//!     → Send to client
//! ```

pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use request::X_REQUEST_ID;
pub use response::{ApiError, ErrorBody, UserDetails};
pub use server::{setup_router, AppState, HttpServer, USER_DETAILS_PATH};
