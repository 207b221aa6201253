//! SQLite storage backend implementation.
//!
//! Wraps a single rusqlite connection. Queries run on the blocking thread pool
//! so request handlers never block the async runtime.

use super::{StorageError, traits::DiagramStore};
use crate::models::{CreateUmlDiagramRequest, DiagramListQuery, UmlDiagram, UpdateUmlDiagramRequest};
use async_trait::async_trait;
use rusqlite::{Connection, OptionalExtension, Row, params};
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::info;

/// SQLite-backed diagram store.
pub struct SqliteDiagramStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteDiagramStore {
    /// Open (or create) the database file at `db_path`.
    pub fn open(db_path: &Path) -> Result<Self, StorageError> {
        let conn = Connection::open(db_path).map_err(|e| {
            StorageError::ConnectionError(format!(
                "Failed to open SQLite database {:?}: {}",
                db_path, e
            ))
        })?;
        info!("Opened SQLite diagram store at {:?}", db_path);
        Self::with_connection(conn)
    }

    /// Open a private in-memory SQLite database.
    pub fn open_in_memory() -> Result<Self, StorageError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, StorageError> {
        init_db(&conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Run `f` against the connection on the blocking pool.
    async fn with_conn<T, F>(&self, f: F) -> Result<T, StorageError>
    where
        T: Send + 'static,
        F: FnOnce(&mut Connection) -> Result<T, StorageError> + Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let mut guard = conn
                .lock()
                .map_err(|_| StorageError::Other("SQLite connection lock poisoned".to_string()))?;
            f(&mut *guard)
        })
        .await
        .map_err(|e| StorageError::Other(format!("SQLite task failed: {}", e)))?
    }
}

/// Initialize database schema.
fn init_db(conn: &Connection) -> Result<(), StorageError> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS uml_diagrams (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            diagram TEXT NOT NULL
        )",
        [],
    )?;
    Ok(())
}

fn row_to_diagram(row: &Row) -> rusqlite::Result<(i64, String, String)> {
    Ok((row.get(0)?, row.get(1)?, row.get(2)?))
}

fn decode((id, name, diagram): (i64, String, String)) -> Result<UmlDiagram, StorageError> {
    let diagram = serde_json::from_str(&diagram).map_err(|e| {
        StorageError::Other(format!("Failed to deserialize diagram {}: {}", id, e))
    })?;
    Ok(UmlDiagram { id, name, diagram })
}

fn encode(diagram: &serde_json::Value) -> Result<String, StorageError> {
    serde_json::to_string(diagram)
        .map_err(|e| StorageError::Other(format!("Failed to serialize diagram: {}", e)))
}

fn select_diagram(conn: &Connection, id: i64) -> Result<Option<UmlDiagram>, StorageError> {
    conn.query_row(
        "SELECT id, name, diagram FROM uml_diagrams WHERE id = ?1",
        params![id],
        row_to_diagram,
    )
    .optional()?
    .map(decode)
    .transpose()
}

#[async_trait]
impl DiagramStore for SqliteDiagramStore {
    fn backend_name(&self) -> &'static str {
        "sqlite"
    }

    async fn create_diagram(
        &self,
        request: CreateUmlDiagramRequest,
    ) -> Result<UmlDiagram, StorageError> {
        let data = encode(&request.diagram)?;
        self.with_conn(move |conn| {
            conn.execute(
                "INSERT INTO uml_diagrams (name, diagram) VALUES (?1, ?2)",
                params![request.name, data],
            )?;
            Ok(UmlDiagram {
                id: conn.last_insert_rowid(),
                name: request.name,
                diagram: request.diagram,
            })
        })
        .await
    }

    async fn get_diagram(&self, id: i64) -> Result<Option<UmlDiagram>, StorageError> {
        self.with_conn(move |conn| select_diagram(conn, id)).await
    }

    async fn update_diagram(
        &self,
        id: i64,
        changes: UpdateUmlDiagramRequest,
    ) -> Result<UmlDiagram, StorageError> {
        self.with_conn(move |conn| {
            let tx = conn.transaction()?;
            let mut diagram =
                select_diagram(&tx, id)?.ok_or_else(|| StorageError::diagram_not_found(id))?;
            changes.apply_to(&mut diagram);
            tx.execute(
                "UPDATE uml_diagrams SET name = ?1, diagram = ?2 WHERE id = ?3",
                params![diagram.name, encode(&diagram.diagram)?, id],
            )?;
            tx.commit()?;
            Ok(diagram)
        })
        .await
    }

    async fn delete_diagram(&self, id: i64) -> Result<(), StorageError> {
        self.with_conn(move |conn| {
            let rows_affected =
                conn.execute("DELETE FROM uml_diagrams WHERE id = ?1", params![id])?;
            if rows_affected == 0 {
                Err(StorageError::diagram_not_found(id))
            } else {
                Ok(())
            }
        })
        .await
    }

    async fn list_diagrams(&self, query: &DiagramListQuery) -> Result<Vec<UmlDiagram>, StorageError> {
        let name = query.name.clone();
        let limit = query.effective_limit();
        let offset = query.effective_offset();
        self.with_conn(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT id, name, diagram FROM uml_diagrams
                 WHERE (?1 IS NULL OR name = ?1)
                 ORDER BY id
                 LIMIT ?2 OFFSET ?3",
            )?;
            let rows = stmt
                .query_map(params![name, limit, offset], row_to_diagram)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            rows.into_iter().map(decode).collect()
        })
        .await
    }
}
