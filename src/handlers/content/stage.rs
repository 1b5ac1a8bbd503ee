use axum::extract::{Path, State};

use crate::database::models::Stage;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

use super::{lookup_failed, required_param};

/// GET /stage/:stage_code - Stage definition with its monster slots
pub async fn stage_get(
    State(state): State<AppState>,
    path: Option<Path<String>>,
) -> ApiResult<Stage> {
    let stage_code = required_param(path, "stageCode")?;

    let stage = state
        .content
        .find_stage(&stage_code)
        .await
        .map_err(|e| lookup_failed("stage", &stage_code, e))?;

    match stage {
        Some(stage) => Ok(ApiResponse::success(stage)),
        None => {
            tracing::debug!(stage_code = %stage_code, "stage not found");
            Err(ApiError::not_found("Stage not found"))
        }
    }
}
