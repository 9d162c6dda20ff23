//! HTTP gateway for the user directory service.
//!
//! Exposes `GET /get-user-details` and answers it with a single call to
//! `auth.v1.UserService/GetUserDetails` over gRPC.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod upstream;

pub use config::GatewayConfig;
pub use http::{setup_router, AppState, HttpServer};
pub use lifecycle::Gateway;
pub use upstream::{GrpcUserDirectory, UserDirectory};
