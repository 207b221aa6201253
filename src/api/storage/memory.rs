//! In-memory storage backend.
//!
//! Used when no database is configured, and by the test suites.

use super::{StorageError, traits::DiagramStore};
use crate::models::{CreateUmlDiagramRequest, DiagramListQuery, UmlDiagram, UpdateUmlDiagramRequest};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Default)]
struct MemoryState {
    last_id: i64,
    diagrams: BTreeMap<i64, UmlDiagram>,
}

/// Diagram store held entirely in process memory.
#[derive(Default)]
pub struct MemoryDiagramStore {
    state: RwLock<MemoryState>,
}

impl MemoryDiagramStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DiagramStore for MemoryDiagramStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn create_diagram(
        &self,
        request: CreateUmlDiagramRequest,
    ) -> Result<UmlDiagram, StorageError> {
        let mut state = self.state.write().await;
        state.last_id += 1;
        let diagram = UmlDiagram {
            id: state.last_id,
            name: request.name,
            diagram: request.diagram,
        };
        state.diagrams.insert(diagram.id, diagram.clone());
        Ok(diagram)
    }

    async fn get_diagram(&self, id: i64) -> Result<Option<UmlDiagram>, StorageError> {
        Ok(self.state.read().await.diagrams.get(&id).cloned())
    }

    async fn update_diagram(
        &self,
        id: i64,
        changes: UpdateUmlDiagramRequest,
    ) -> Result<UmlDiagram, StorageError> {
        let mut state = self.state.write().await;
        let diagram = state
            .diagrams
            .get_mut(&id)
            .ok_or_else(|| StorageError::diagram_not_found(id))?;
        changes.apply_to(diagram);
        Ok(diagram.clone())
    }

    async fn delete_diagram(&self, id: i64) -> Result<(), StorageError> {
        self.state
            .write()
            .await
            .diagrams
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| StorageError::diagram_not_found(id))
    }

    async fn list_diagrams(&self, query: &DiagramListQuery) -> Result<Vec<UmlDiagram>, StorageError> {
        let state = self.state.read().await;
        Ok(state
            .diagrams
            .values()
            .filter(|diagram| query.matches(diagram))
            .skip(query.effective_offset() as usize)
            .take(query.effective_limit() as usize)
            .cloned()
            .collect())
    }
}
