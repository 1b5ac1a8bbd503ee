// handlers/auth/register.rs - POST /auth/register handler

use axum::extract::State;
use serde::{Deserialize, Serialize};

use crate::auth::hash_password_blocking;
use crate::database::models::NewUser;
use crate::database::DatabaseError;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, LenientJson};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub struct RegisterRequest {
    pub id: String,
    #[serde(alias = "password")]
    pub pw: String,
    pub name: String,
}

impl RegisterRequest {
    fn validate(&self) -> Result<(), ApiError> {
        for (field, value) in [("id", &self.id), ("pw", &self.pw), ("name", &self.name)] {
            if value.trim().is_empty() {
                return Err(ApiError::bad_request(format!("{} must not be empty", field)));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: &'static str,
    pub id: String,
    pub uid: i32,
}

/// POST /auth/register - Create an account with default stats
///
/// Expected Input:
/// ```json
/// { "id": "hero1", "pw": "pass123", "name": "Hero" }
/// ```
///
/// Uniqueness of `id` is enforced by the store; a taken id is reported from
/// the insert itself, never from a separate lookup.
pub async fn register(
    State(state): State<AppState>,
    LenientJson(request): LenientJson<RegisterRequest>,
) -> ApiResult<RegisterResponse> {
    request.validate()?;

    let password_hash =
        hash_password_blocking(request.pw, state.config.security.bcrypt_cost).await?;
    let new_user = NewUser {
        id: request.id,
        password_hash,
        name: request.name,
    };

    match state.accounts.insert(&new_user).await {
        Ok(uid) => {
            tracing::info!(id = %new_user.id, uid, "registered new user");
            Ok(ApiResponse::created(RegisterResponse {
                message: "Registration successful",
                id: new_user.id,
                uid,
            }))
        }
        Err(DatabaseError::Duplicate(detail)) => {
            tracing::warn!(
                id = %new_user.id,
                detail = %detail,
                "register failed: id already exists"
            );
            Err(ApiError::conflict("id already exists"))
        }
        Err(e) => {
            tracing::error!(id = %new_user.id, "register insert failed");
            Err(e.into())
        }
    }
}
