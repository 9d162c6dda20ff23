//! User directory: the one outbound dependency of the gateway.
//!
//! # Responsibilities
//! - Build the single gRPC channel to the user service at startup
//! - Expose lookups behind a trait so handlers can run against fakes
//! - Reduce transport failures to a message suitable for clients
//!
//! # Design Decisions
//! - Channel connects lazily; only a malformed address fails `initialize`
//! - No TLS, no reconnect policy beyond the channel's own
//! - No timeout; the call lives exactly as long as the inbound request

use async_trait::async_trait;
use thiserror::Error;
use tonic::transport::{Channel, Endpoint};

use crate::config::UpstreamConfig;
use crate::upstream::proto::{GetUserRequest, GetUserResponse, UserServiceClient};

/// Errors raised while building the upstream binding.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("invalid user service endpoint '{endpoint}': {source}")]
    InvalidEndpoint {
        endpoint: String,
        #[source]
        source: tonic::transport::Error,
    },

    #[error("user service endpoint '{0}' requests TLS, which is not supported")]
    TlsUnsupported(String),
}

/// A failed lookup. Displays as the remote status message only.
#[derive(Debug, Error)]
#[error("{}", .0.message())]
pub struct LookupError(#[from] pub tonic::Status);

impl LookupError {
    pub fn code(&self) -> tonic::Code {
        self.0.code()
    }
}

/// Resolves usernames to user details.
#[async_trait]
pub trait UserDirectory: Send + Sync + 'static {
    async fn get_user_details(
        &self,
        request: tonic::Request<GetUserRequest>,
    ) -> Result<GetUserResponse, LookupError>;
}

/// Directory backed by the remote `auth.v1.UserService`.
#[derive(Debug, Clone)]
pub struct GrpcUserDirectory {
    client: UserServiceClient<Channel>,
    endpoint: String,
}

impl GrpcUserDirectory {
    /// Create the channel to the configured endpoint.
    ///
    /// The channel is not connected until the first call, so an offline
    /// service does not stop the gateway from starting.
    pub fn initialize(config: &UpstreamConfig) -> Result<Self, UpstreamError> {
        let endpoint = endpoint_uri(&config.endpoint)?;
        let channel = Endpoint::from_shared(endpoint.clone())
            .map_err(|source| UpstreamError::InvalidEndpoint {
                endpoint: config.endpoint.clone(),
                source,
            })?
            .connect_lazy();

        tracing::info!(endpoint = %endpoint, "User service channel created");

        Ok(Self {
            client: UserServiceClient::new(channel),
            endpoint,
        })
    }

    /// The URI the channel dials.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl UserDirectory for GrpcUserDirectory {
    async fn get_user_details(
        &self,
        request: tonic::Request<GetUserRequest>,
    ) -> Result<GetUserResponse, LookupError> {
        // Clones share the underlying channel.
        let mut client = self.client.clone();
        let response = client.get_user_details(request).await?;
        Ok(response.into_inner())
    }
}

/// Turn a configured address into a plaintext HTTP/2 URI.
fn endpoint_uri(address: &str) -> Result<String, UpstreamError> {
    let address = address.trim();
    if address.starts_with("https://") {
        return Err(UpstreamError::TlsUnsupported(address.to_string()));
    }
    if address.starts_with("http://") {
        Ok(address.to_string())
    } else {
        Ok(format!("http://{address}"))
    }
}
