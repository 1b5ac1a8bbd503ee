use std::time::Duration;

use axum::{
    error_handling::HandleErrorLayer,
    extract::DefaultBodyLimit,
    handler::Handler,
    routing::{get, post},
    Router,
};
use tower::{timeout::TimeoutLayer, ServiceBuilder};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{auth, content, system, user};
use crate::middleware::{allow_any_origin, handle_layer_error};
use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    let api = &state.config.api;
    let timeout = Duration::from_secs(api.request_timeout_secs);
    let body_limit = api.max_request_size_bytes;
    let request_logging = api.enable_request_logging;

    let router = Router::new()
        .route("/", get(system::root))
        .route("/health", get(system::health))
        .merge(auth_routes())
        .merge(content_routes())
        .merge(user_routes())
        .fallback(system::fallback)
        .with_state(state)
        // Global middleware
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_layer_error))
                .layer(TimeoutLayer::new(timeout)),
        )
        .layer(CorsLayer::permissive())
        .layer(axum::middleware::from_fn(allow_any_origin));

    if request_logging {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    }
}

fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(auth::login))
        .route("/auth/register", post(auth::register))
}

fn content_routes() -> Router<AppState> {
    Router::new()
        .merge(lookup_routes("/stage", content::stage_get))
        .merge(lookup_routes("/monster", content::monster_get))
        .merge(lookup_routes("/card", content::card_get))
        .merge(lookup_routes("/level", content::level_get))
}

fn user_routes() -> Router<AppState> {
    Router::new().route(
        "/user/progress",
        post(user::progress_save).put(user::progress_save),
    )
}

/// Mounts a keyed lookup at `base/:key`, plus the bare `base` and `base/`
/// so a request without a key reaches the handler and gets a 400.
fn lookup_routes<H, T>(base: &str, handler: H) -> Router<AppState>
where
    H: Handler<T, AppState>,
    T: 'static,
{
    Router::new()
        .route(base, get(handler.clone()))
        .route(&format!("{}/", base), get(handler.clone()))
        .route(&format!("{}/:key", base), get(handler))
}
