//! Health check endpoint.

use axum::{extract::State, response::Json};
use serde_json::{Value, json};

use super::app_state::AppState;

/// GET /health - Liveness check reporting the storage backend
#[utoipa::path(
    get,
    path = "/api/v1/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is up", body = Object)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "uml-diagram-api",
        "version": env!("CARGO_PKG_VERSION"),
        "storage": state.diagrams.backend_name(),
    }))
}
