// handlers/user/progress.rs - POST|PUT /user/progress handler

use axum::extract::State;
use serde::{Deserialize, Serialize};

use crate::database::mapper::non_blank;
use crate::database::models::ProgressUpdate;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, LenientJson};
use crate::state::AppState;

/// Profile object sent by the client when saving.
///
/// Every stat is required: the save replaces the stored values wholesale,
/// so a missing field is a malformed request rather than an implicit zero.
/// Other profile fields the client echoes back (`name`, `id`) are ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub struct ProgressRequest {
    pub uid: i64,
    pub level: i32,
    pub hp: i32,
    pub atk: i32,
    pub exp: i32,
    #[serde(rename = "clearedstagecode", alias = "clearstagecode", default)]
    pub cleared_stage_code: Option<String>,
}

impl ProgressRequest {
    pub fn into_update(self) -> Result<ProgressUpdate, ApiError> {
        let uid = match i32::try_from(self.uid) {
            Ok(uid) if uid > 0 => uid,
            _ => {
                tracing::warn!(uid = self.uid, "progress save with invalid uid");
                return Err(ApiError::bad_request("uid must be a positive integer"));
            }
        };

        Ok(ProgressUpdate {
            uid,
            level: self.level,
            hp: self.hp,
            atk: self.atk,
            exp: self.exp,
            cleared_stage_code: non_blank(self.cleared_stage_code),
        })
    }
}

#[derive(Debug, Serialize)]
pub struct ProgressResponse {
    pub message: &'static str,
    pub uid: i32,
}

/// POST|PUT /user/progress - Overwrite level, hp, atk, exp and cleared stage
///
/// Expected Input:
/// ```json
/// { "uid": 7, "level": 3, "hp": 140, "atk": 18, "exp": 20, "clearedStageCode": "ST002" }
/// ```
///
/// Concurrent saves for one uid are not serialized; the last to commit wins.
pub async fn progress_save(
    State(state): State<AppState>,
    LenientJson(request): LenientJson<ProgressRequest>,
) -> ApiResult<ProgressResponse> {
    let update = request.into_update()?;

    let found = state.accounts.overwrite_progress(&update).await.map_err(|e| {
        tracing::error!(uid = update.uid, "progress save failed");
        ApiError::from(e)
    })?;

    if !found {
        tracing::warn!(uid = update.uid, "progress save failed: no such uid");
        return Err(ApiError::not_found("no such uid"));
    }

    tracing::info!(
        uid = update.uid,
        level = update.level,
        cleared_stage_code = ?update.cleared_stage_code,
        "progress saved"
    );
    Ok(ApiResponse::success(ProgressResponse {
        message: "Progress saved",
        uid: update.uid,
    }))
}
