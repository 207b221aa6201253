//! Application state management.
//!
//! Defines the AppState struct shared by all route handlers.

use crate::config::StorageConfig;
use crate::services::DiagramService;
use crate::storage::{
    DiagramStore, MemoryDiagramStore, PostgresDiagramStore, SqliteDiagramStore, StorageError,
};
use axum::extract::FromRef;
use std::sync::Arc;
use tracing::info;

/// Application state shared across all route handlers.
#[derive(Clone)]
pub struct AppState {
    /// Diagram service over the configured storage backend
    pub diagrams: Arc<DiagramService>,
}

impl AppState {
    /// Create a new application state backed by in-memory storage.
    pub fn new() -> Self {
        Self::with_store(Arc::new(MemoryDiagramStore::new()))
    }

    pub fn with_store(store: Arc<dyn DiagramStore>) -> Self {
        Self {
            diagrams: Arc::new(DiagramService::new(store)),
        }
    }

    /// Initialize the storage backend selected by configuration.
    ///
    /// PostgreSQL runs pending migrations before the state is returned.
    pub async fn from_storage_config(storage: &StorageConfig) -> Result<Self, StorageError> {
        let store: Arc<dyn DiagramStore> = match storage {
            StorageConfig::Postgres(url) => {
                info!("Using PostgreSQL diagram storage");
                Arc::new(PostgresDiagramStore::connect(url).await?)
            }
            StorageConfig::Sqlite(path) => {
                info!("Using SQLite diagram storage at {:?}", path);
                Arc::new(SqliteDiagramStore::open(path)?)
            }
            StorageConfig::Memory => {
                info!("Using in-memory diagram storage (data is lost on restart)");
                Arc::new(MemoryDiagramStore::new())
            }
        };
        Ok(Self::with_store(store))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

// Allow the diagram service to be extracted directly (for Axum)
impl FromRef<AppState> for Arc<DiagramService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.diagrams.clone()
    }
}
