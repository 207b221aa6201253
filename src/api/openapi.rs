//! OpenAPI specification definition.
//!
//! Aggregates all route handlers and schemas for OpenAPI documentation generation.

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        crate::routes::health::health_check,
        // Diagrams
        crate::routes::diagrams::list_diagrams,
        crate::routes::diagrams::create_diagram,
        crate::routes::diagrams::get_diagram,
        crate::routes::diagrams::replace_diagram,
        crate::routes::diagrams::update_diagram,
        crate::routes::diagrams::delete_diagram,
        crate::routes::diagrams::display_diagram,
    ),
    components(schemas(
        crate::models::UmlDiagram,
        crate::models::CreateUmlDiagramRequest,
        crate::models::ReplaceUmlDiagramRequest,
        crate::models::UpdateUmlDiagramRequest,
    )),
    tags(
        (name = "Diagrams", description = "UML diagram records"),
        (name = "Health", description = "Service health"),
    ),
    info(
        title = "UML Diagram API",
        description = "Stores UML diagrams as named JSON documents"
    )
)]
pub struct ApiDoc;
