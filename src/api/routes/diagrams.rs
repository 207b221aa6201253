//! UML diagram routes.
//!
//! Provides CRUD endpoints for diagram records.

use axum::{
    Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
};
use std::sync::Arc;

use super::app_state::AppState;
use super::error::ApiError;
use crate::models::{
    CreateUmlDiagramRequest, DiagramListQuery, ReplaceUmlDiagramRequest, UmlDiagram,
    UpdateUmlDiagramRequest,
};
use crate::services::DiagramService;

/// Create the diagram router
pub fn diagrams_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_diagrams).post(create_diagram))
        .route(
            "/{id}",
            get(get_diagram)
                .put(replace_diagram)
                .patch(update_diagram)
                .delete(delete_diagram),
        )
        .route("/{id}/display", get(display_diagram))
}

/// GET /diagrams - List diagrams ordered by id
#[utoipa::path(
    get,
    path = "/api/v1/diagrams",
    tag = "Diagrams",
    params(DiagramListQuery),
    responses(
        (status = 200, description = "Diagrams retrieved successfully", body = Vec<UmlDiagram>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_diagrams(
    State(service): State<Arc<DiagramService>>,
    Query(query): Query<DiagramListQuery>,
) -> Result<Json<Vec<UmlDiagram>>, ApiError> {
    Ok(Json(service.list(&query).await?))
}

/// POST /diagrams - Create a new diagram
#[utoipa::path(
    post,
    path = "/api/v1/diagrams",
    tag = "Diagrams",
    request_body = CreateUmlDiagramRequest,
    responses(
        (status = 201, description = "Diagram created successfully", body = UmlDiagram),
        (status = 400, description = "Malformed JSON body"),
        (status = 422, description = "Name too long or diagram missing"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_diagram(
    State(service): State<Arc<DiagramService>>,
    Json(request): Json<CreateUmlDiagramRequest>,
) -> Result<(StatusCode, Json<UmlDiagram>), ApiError> {
    let diagram = service.create(request).await?;
    Ok((StatusCode::CREATED, Json(diagram)))
}

/// GET /diagrams/{id} - Get a diagram by ID
#[utoipa::path(
    get,
    path = "/api/v1/diagrams/{id}",
    tag = "Diagrams",
    params(
        ("id" = i64, Path, description = "Diagram ID")
    ),
    responses(
        (status = 200, description = "Diagram retrieved successfully", body = UmlDiagram),
        (status = 404, description = "Diagram not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_diagram(
    State(service): State<Arc<DiagramService>>,
    Path(id): Path<i64>,
) -> Result<Json<UmlDiagram>, ApiError> {
    Ok(Json(service.get(id).await?))
}

/// PUT /diagrams/{id} - Replace both fields of a diagram
#[utoipa::path(
    put,
    path = "/api/v1/diagrams/{id}",
    tag = "Diagrams",
    params(
        ("id" = i64, Path, description = "Diagram ID")
    ),
    request_body = ReplaceUmlDiagramRequest,
    responses(
        (status = 200, description = "Diagram updated successfully", body = UmlDiagram),
        (status = 404, description = "Diagram not found"),
        (status = 422, description = "Invalid field values"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn replace_diagram(
    State(service): State<Arc<DiagramService>>,
    Path(id): Path<i64>,
    Json(request): Json<ReplaceUmlDiagramRequest>,
) -> Result<Json<UmlDiagram>, ApiError> {
    Ok(Json(service.update(id, request.into()).await?))
}

/// PATCH /diagrams/{id} - Update the supplied fields of a diagram
#[utoipa::path(
    patch,
    path = "/api/v1/diagrams/{id}",
    tag = "Diagrams",
    params(
        ("id" = i64, Path, description = "Diagram ID")
    ),
    request_body = UpdateUmlDiagramRequest,
    responses(
        (status = 200, description = "Diagram updated successfully", body = UmlDiagram),
        (status = 404, description = "Diagram not found"),
        (status = 422, description = "Invalid field values"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn update_diagram(
    State(service): State<Arc<DiagramService>>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateUmlDiagramRequest>,
) -> Result<Json<UmlDiagram>, ApiError> {
    Ok(Json(service.update(id, request).await?))
}

/// DELETE /diagrams/{id} - Delete a diagram
#[utoipa::path(
    delete,
    path = "/api/v1/diagrams/{id}",
    tag = "Diagrams",
    params(
        ("id" = i64, Path, description = "Diagram ID")
    ),
    responses(
        (status = 204, description = "Diagram deleted successfully"),
        (status = 404, description = "Diagram not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn delete_diagram(
    State(service): State<Arc<DiagramService>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /diagrams/{id}/display - Display string of a diagram (its name)
#[utoipa::path(
    get,
    path = "/api/v1/diagrams/{id}/display",
    tag = "Diagrams",
    params(
        ("id" = i64, Path, description = "Diagram ID")
    ),
    responses(
        (status = 200, description = "Diagram name", body = String, content_type = "text/plain"),
        (status = 404, description = "Diagram not found")
    )
)]
pub async fn display_diagram(
    State(service): State<Arc<DiagramService>>,
    Path(id): Path<i64>,
) -> Result<String, ApiError> {
    Ok(service.display(id).await?)
}
