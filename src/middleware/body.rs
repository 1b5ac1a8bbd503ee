//! JSON body extractor tolerant of the game client's key casing.
//!
//! The client serializes with its own field naming, so top-level keys are
//! lowercased before deserializing; request types declare lowercase names.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::StatusCode,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::ApiError;

/// Client-facing message for every body that cannot be read into the request shape
pub const MALFORMED_BODY: &str = "Invalid request format";

#[derive(Debug, Clone)]
pub struct LenientJson<T>(pub T);

impl<T: DeserializeOwned> LenientJson<T> {
    pub fn from_slice(bytes: &[u8]) -> Result<Self, ApiError> {
        let value: Value = serde_json::from_slice(bytes).map_err(|e| {
            tracing::warn!(error = %e, "request body is not valid JSON");
            ApiError::invalid_json(MALFORMED_BODY)
        })?;

        serde_json::from_value(lowercase_keys(value))
            .map(LenientJson)
            .map_err(|e| {
                tracing::warn!(error = %e, "request body does not match the expected shape");
                ApiError::bad_request(MALFORMED_BODY)
            })
    }
}

#[async_trait]
impl<T, S> FromRequest<S> for LenientJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                ApiError::payload_too_large("Request body too large")
            } else {
                tracing::warn!(error = %rejection, "failed to read request body");
                ApiError::bad_request(MALFORMED_BODY)
            }
        })?;

        Self::from_slice(&bytes)
    }
}

fn lowercase_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, v)| (key.to_lowercase(), v))
                .collect::<Map<String, Value>>(),
        ),
        other => other,
    }
}
