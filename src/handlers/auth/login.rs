// handlers/auth/login.rs - POST /auth/login handler

use axum::extract::State;
use serde::Deserialize;

use crate::auth::verify_password_blocking;
use crate::database::models::UserProfile;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, LenientJson};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub struct LoginRequest {
    pub id: String,
    #[serde(alias = "password")]
    pub pw: String,
}

/// POST /auth/login - Verify credentials and return the player's profile
///
/// Expected Input:
/// ```json
/// { "id": "hero1", "pw": "pass123" }
/// ```
///
/// Unknown id and wrong password produce the same 401 response; only the
/// log line tells them apart.
pub async fn login(
    State(state): State<AppState>,
    LenientJson(request): LenientJson<LoginRequest>,
) -> ApiResult<UserProfile> {
    let user = state.accounts.find_by_id(&request.id).await.map_err(|e| {
        tracing::error!(id = %request.id, "login lookup failed");
        ApiError::from(e)
    })?;

    let Some(user) = user else {
        tracing::warn!(id = %request.id, "login failed: no such id");
        return Err(ApiError::invalid_credentials());
    };

    if !verify_password_blocking(request.pw, user.password_hash.clone()).await? {
        tracing::warn!(id = %request.id, uid = user.uid, "login failed: bad password");
        return Err(ApiError::invalid_credentials());
    }

    tracing::debug!(id = %request.id, uid = user.uid, "login succeeded");
    Ok(ApiResponse::success(user.profile()))
}
