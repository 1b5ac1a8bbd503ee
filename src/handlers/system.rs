use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::state::AppState;

/// GET / - service description
pub async fn root() -> Json<Value> {
    Json(json!({
        "success": true,
        "data": {
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "endpoints": {
                "auth": "/auth/login, /auth/register (POST)",
                "content": "/stage/:stageCode, /monster/:monsterCode, /card/:cardCode, \
                            /level/:levelValue (GET)",
                "progress": "/user/progress (POST, PUT)",
                "health": "/health (GET)",
            }
        }
    }))
}

/// GET /health - liveness plus reachability of both schemas
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();
    let account = state.accounts.ping().await;
    let content = state.content.ping().await;

    let status_of = |result: &Result<(), _>| if result.is_ok() { "ok" } else { "unavailable" };
    let databases = json!({
        "account": status_of(&account),
        "content": status_of(&content),
    });

    if let Err(e) = account.as_ref().and(content.as_ref()) {
        tracing::warn!(error = %e, "health check failed");
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "success": false,
                "error": "database unavailable",
                "code": "SERVICE_UNAVAILABLE",
                "data": {
                    "status": "degraded",
                    "timestamp": now,
                    "database": databases,
                }
            })),
        );
    }

    (
        StatusCode::OK,
        Json(json!({
            "success": true,
            "data": {
                "status": "ok",
                "timestamp": now,
                "database": databases,
            }
        })),
    )
}

/// Unmatched routes answer in the same envelope as handler errors
pub async fn fallback() -> ApiError {
    ApiError::not_found("Route not found")
}
