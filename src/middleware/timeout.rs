use axum::BoxError;
use tower::timeout::error::Elapsed;

use crate::error::ApiError;

/// Errors surfaced by the tower layers around the router, in the API envelope
pub async fn handle_layer_error(err: BoxError) -> ApiError {
    if err.is::<Elapsed>() {
        tracing::warn!("request timed out");
        ApiError::request_timeout("Request timed out")
    } else {
        tracing::error!(error = %err, "unhandled middleware error");
        ApiError::internal_server_error("Internal server error")
    }
}
