//! JSON bodies written by the gateway.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::upstream::{GetUserResponse, LookupError};

/// Successful lookup, copied verbatim from the user service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDetails {
    pub username: String,
    pub email: String,
    pub full_name: String,
}

impl From<GetUserResponse> for UserDetails {
    fn from(response: GetUserResponse) -> Self {
        Self {
            username: response.username,
            email: response.email,
            full_name: response.full_name,
        }
    }
}

/// `{"error": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Failures the handler reports to the caller.
#[derive(Debug)]
pub enum ApiError {
    /// No username in the query and no fallback configured.
    MissingUsername,
    /// The user service call failed.
    Lookup(LookupError),
}

impl From<LookupError> for ApiError {
    fn from(err: LookupError) -> Self {
        ApiError::Lookup(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            ApiError::MissingUsername => (
                StatusCode::BAD_REQUEST,
                "username query parameter is required".to_string(),
            ),
            ApiError::Lookup(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
        };
        (status, Json(ErrorBody { error })).into_response()
    }
}
