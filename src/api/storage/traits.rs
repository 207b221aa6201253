//! Storage trait definitions for the diagram storage backends.

use crate::models::{CreateUmlDiagramRequest, DiagramListQuery, UmlDiagram, UpdateUmlDiagramRequest};

/// Repository over persisted UML diagrams.
///
/// Backends assume their input has already been validated; `DiagramService`
/// is the only caller in the application.
#[async_trait::async_trait]
pub trait DiagramStore: Send + Sync {
    /// Short backend name, reported by the health endpoint
    fn backend_name(&self) -> &'static str;

    /// Insert a new diagram and return it with its assigned id
    async fn create_diagram(
        &self,
        request: CreateUmlDiagramRequest,
    ) -> Result<UmlDiagram, super::StorageError>;

    /// Get diagram by ID
    async fn get_diagram(&self, id: i64) -> Result<Option<UmlDiagram>, super::StorageError>;

    /// Replace the supplied fields of a diagram
    async fn update_diagram(
        &self,
        id: i64,
        changes: UpdateUmlDiagramRequest,
    ) -> Result<UmlDiagram, super::StorageError>;

    /// Delete a diagram
    async fn delete_diagram(&self, id: i64) -> Result<(), super::StorageError>;

    /// List diagrams ordered by id
    async fn list_diagrams(
        &self,
        query: &DiagramListQuery,
    ) -> Result<Vec<UmlDiagram>, super::StorageError>;
}
