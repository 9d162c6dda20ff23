//! Messages and client stub for `auth.v1.UserService`, generated at build
//! time from `proto/auth/v1/user.proto`.

tonic::include_proto!("auth.v1");

pub use user_service_client::UserServiceClient;
