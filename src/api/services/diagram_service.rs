//! Diagram service: validation and logging around a `DiagramStore`.

use crate::models::{CreateUmlDiagramRequest, DiagramListQuery, UmlDiagram, UpdateUmlDiagramRequest};
use crate::storage::{DiagramStore, StorageError};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Entry point for all diagram operations.
#[derive(Clone)]
pub struct DiagramService {
    store: Arc<dyn DiagramStore>,
}

impl DiagramService {
    pub fn new(store: Arc<dyn DiagramStore>) -> Self {
        Self { store }
    }

    pub fn backend_name(&self) -> &'static str {
        self.store.backend_name()
    }

    pub async fn create(&self, request: CreateUmlDiagramRequest) -> Result<UmlDiagram, StorageError> {
        if let Err(e) = request.validate() {
            warn!("Rejected diagram create: {}", e);
            return Err(e.into());
        }

        let diagram = self.store.create_diagram(request).await?;
        info!("Created diagram {} '{}'", diagram.id, diagram);
        Ok(diagram)
    }

    /// Fetch a diagram, failing with `NotFound` when it does not exist.
    pub async fn get(&self, id: i64) -> Result<UmlDiagram, StorageError> {
        self.store
            .get_diagram(id)
            .await?
            .ok_or_else(|| StorageError::diagram_not_found(id))
    }

    pub async fn update(
        &self,
        id: i64,
        changes: UpdateUmlDiagramRequest,
    ) -> Result<UmlDiagram, StorageError> {
        if let Err(e) = changes.validate() {
            warn!("Rejected update of diagram {}: {}", id, e);
            return Err(e.into());
        }

        // An empty change set still has to report a missing id.
        if changes.is_empty() {
            return self.get(id).await;
        }

        let diagram = self.store.update_diagram(id, changes).await?;
        info!("Updated diagram {} '{}'", diagram.id, diagram);
        Ok(diagram)
    }

    pub async fn delete(&self, id: i64) -> Result<(), StorageError> {
        self.store.delete_diagram(id).await?;
        info!("Deleted diagram {}", id);
        Ok(())
    }

    pub async fn list(&self, query: &DiagramListQuery) -> Result<Vec<UmlDiagram>, StorageError> {
        let diagrams = self.store.list_diagrams(query).await?;
        debug!("Listed {} diagrams", diagrams.len());
        Ok(diagrams)
    }

    /// Display string of a diagram (its name).
    pub async fn display(&self, id: i64) -> Result<String, StorageError> {
        Ok(self.get(id).await?.to_string())
    }
}
