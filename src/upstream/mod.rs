//! Upstream user service subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     UpstreamConfig → directory.rs (GrpcUserDirectory::initialize)
//!     → Arc<dyn UserDirectory> stored in AppState
//!
//! Per request:
//!     handler → UserDirectory::get_user_details
//!     → proto.rs (UserServiceClient, prost codec)
//!     → auth.v1.UserService/GetUserDetails
//! ```

pub mod directory;
pub mod proto;

pub use directory::{GrpcUserDirectory, LookupError, UpstreamError, UserDirectory};
pub use proto::{GetUserRequest, GetUserResponse, UserServiceClient};
