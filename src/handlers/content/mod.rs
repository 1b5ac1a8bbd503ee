// handlers/content/mod.rs - Read-only game content lookups
//
// Each lookup takes one path parameter and answers 400 when it is missing,
// 404 when no row matches and 200 with the mapped row otherwise.

use axum::extract::Path;

use crate::database::DatabaseError;
use crate::error::ApiError;

pub mod card;    // GET /card/:card_code
pub mod level;   // GET /level/:level_value
pub mod monster; // GET /monster/:monster_code
pub mod stage;   // GET /stage/:stage_code

pub use card::card_get;
pub use level::level_get;
pub use monster::monster_get;
pub use stage::stage_get;

/// Path parameter, or 400 when the route was hit without one
pub(crate) fn required_param(
    path: Option<Path<String>>,
    name: &'static str,
) -> Result<String, ApiError> {
    match path {
        Some(Path(value)) if !value.trim().is_empty() => Ok(value),
        _ => {
            tracing::warn!(param = name, "lookup without path parameter");
            Err(ApiError::bad_request(format!("{} is required", name)))
        }
    }
}

pub(crate) fn lookup_failed(entity: &'static str, key: &str, err: DatabaseError) -> ApiError {
    tracing::error!(entity, key = %key, "content lookup failed");
    err.into()
}
