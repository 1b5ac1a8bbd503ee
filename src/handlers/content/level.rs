use axum::extract::{Path, State};

use crate::database::models::Level;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

use super::{lookup_failed, required_param};

/// GET /level/:level_value - Required exp and base stats for a level
pub async fn level_get(
    State(state): State<AppState>,
    path: Option<Path<String>>,
) -> ApiResult<Level> {
    let raw = required_param(path, "levelValue")?;
    let level_value: i32 = raw.trim().parse().map_err(|_| {
        tracing::warn!(level_value = %raw, "level lookup with non-numeric key");
        ApiError::bad_request("levelValue must be an integer")
    })?;

    let level = state
        .content
        .find_level(level_value)
        .await
        .map_err(|e| lookup_failed("level", &raw, e))?;

    match level {
        Some(level) => Ok(ApiResponse::success(level)),
        None => {
            tracing::debug!(level_value, "level not found");
            Err(ApiError::not_found("Level not found"))
        }
    }
}
