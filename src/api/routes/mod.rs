//! API routes module - organizes all route handlers.

pub mod app_state;
pub mod diagrams;
pub mod error;
pub mod health;
pub mod openapi;

use axum::{Router, middleware::from_fn_with_state, routing::get};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

pub use app_state::AppState;

use crate::config::ApiConfig;
use crate::middleware::{create_cors_layer, create_rate_limiter, rate_limit_middleware};

/// Create the API router (mounted under /api/v1)
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .nest("/diagrams", diagrams::diagrams_router())
        .merge(openapi::openapi_router())
}

/// Create the full application: health check at the root, the API under
/// /api/v1, and the configured middleware layers.
pub fn create_app(app_state: AppState, config: &ApiConfig) -> Router {
    let mut app: Router = Router::new()
        .route("/health", get(health::health_check))
        .nest("/api/v1", create_api_router())
        .with_state(app_state);

    if let Some(per_minute) = config.rate_limit_per_minute {
        app = app.layer(from_fn_with_state(
            create_rate_limiter(per_minute),
            rate_limit_middleware,
        ));
    }

    app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(create_cors_layer(&config.cors_allowed_origins)),
    )
}

/// Create the application state (in-memory storage).
pub fn create_app_state() -> AppState {
    AppState::new()
}

/// Create the application state with the configured storage backend (async).
pub async fn create_app_state_with_storage(
    config: &ApiConfig,
) -> Result<AppState, crate::storage::StorageError> {
    AppState::from_storage_config(&config.storage).await
}
