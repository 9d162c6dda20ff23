//! Request handlers.
//!
//! One handler: `GET /get-user-details`. It turns the query into a single
//! user service call and the reply into JSON. Dropping the handler future
//! (client went away) drops the in-flight call with it.

use axum::{
    extract::{Query, State},
    http::HeaderMap,
    Json,
};
use tonic::metadata::{Ascii, MetadataValue};

use crate::http::request::X_REQUEST_ID;
use crate::http::response::{ApiError, UserDetails};
use crate::http::server::AppState;
use crate::upstream::GetUserRequest;

/// First `username` in the query string; later repeats are ignored.
pub fn first_username(pairs: Vec<(String, String)>) -> Option<String> {
    pairs
        .into_iter()
        .find(|(key, _)| key == "username")
        .map(|(_, value)| value)
}

/// Pick the username to look up: the requested one if non-empty, else the
/// fallback.
pub fn resolve_username(requested: Option<String>, fallback: Option<&str>) -> Option<String> {
    match requested {
        Some(name) if !name.is_empty() => Some(name),
        _ => fallback.map(str::to_string),
    }
}

pub async fn get_user_details(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<UserDetails>, ApiError> {
    let username = resolve_username(first_username(pairs), state.fallback_username())
        .ok_or(ApiError::MissingUsername)?;

    let request_id = headers.get(X_REQUEST_ID).and_then(|v| v.to_str().ok());

    tracing::debug!(request_id = ?request_id, username = %username, "Looking up user");

    let mut request = tonic::Request::new(GetUserRequest {
        username: username.clone(),
    });
    if let Some(value) = request_id.and_then(|id| id.parse::<MetadataValue<Ascii>>().ok()) {
        request.metadata_mut().insert(X_REQUEST_ID, value);
    }

    match state.directory.get_user_details(request).await {
        Ok(response) => Ok(Json(UserDetails::from(response))),
        Err(err) => {
            tracing::warn!(
                request_id = ?request_id,
                username = %username,
                code = ?err.code(),
                error = %err,
                "User lookup failed"
            );
            Err(ApiError::Lookup(err))
        }
    }
}
