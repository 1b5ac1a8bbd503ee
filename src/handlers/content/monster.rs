use axum::extract::{Path, State};

use crate::database::models::Monster;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

use super::{lookup_failed, required_param};

/// GET /monster/:monster_code
pub async fn monster_get(
    State(state): State<AppState>,
    path: Option<Path<String>>,
) -> ApiResult<Monster> {
    let monster_code = required_param(path, "monsterCode")?;

    let row = state
        .content
        .find_monster(&monster_code)
        .await
        .map_err(|e| lookup_failed("monster", &monster_code, e))?
        .ok_or_else(|| {
            tracing::debug!(monster_code = %monster_code, "monster not found");
            ApiError::not_found("Monster not found")
        })?;

    let monster = row
        .into_monster(state.config.content.enum_policy)
        .map_err(|e| lookup_failed("monster", &monster_code, e))?;

    Ok(ApiResponse::success(monster))
}
