use axum::extract::{Path, State};

use crate::database::models::Card;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

use super::{lookup_failed, required_param};

/// GET /card/:card_code
pub async fn card_get(
    State(state): State<AppState>,
    path: Option<Path<String>>,
) -> ApiResult<Card> {
    let card_code = required_param(path, "cardCode")?;

    let row = state
        .content
        .find_card(&card_code)
        .await
        .map_err(|e| lookup_failed("card", &card_code, e))?
        .ok_or_else(|| {
            tracing::debug!(card_code = %card_code, "card not found");
            ApiError::not_found("Card not found")
        })?;

    let card = row
        .into_card(state.config.content.enum_policy)
        .map_err(|e| lookup_failed("card", &card_code, e))?;

    Ok(ApiResponse::success(card))
}
