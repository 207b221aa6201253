//! PostgreSQL storage backend implementation.
//!
//! Uses sqlx for database operations and implements the DiagramStore trait.

use super::{StorageError, traits::DiagramStore};
use crate::models::{CreateUmlDiagramRequest, DiagramListQuery, UmlDiagram, UpdateUmlDiagramRequest};
use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::types::Json;

#[derive(sqlx::FromRow)]
struct DiagramRow {
    id: i64,
    name: String,
    diagram: Json<serde_json::Value>,
}

impl From<DiagramRow> for UmlDiagram {
    fn from(row: DiagramRow) -> Self {
        UmlDiagram {
            id: row.id,
            name: row.name,
            diagram: row.diagram.0,
        }
    }
}

/// PostgreSQL storage backend implementation.
pub struct PostgresDiagramStore {
    pool: PgPool,
}

impl PostgresDiagramStore {
    /// Create a new PostgreSQL storage backend.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect to `database_url` and apply the embedded migrations.
    pub async fn connect(database_url: &str) -> Result<Self, StorageError> {
        let pool = PgPool::connect(database_url).await.map_err(|e| {
            StorageError::ConnectionError(format!("Failed to connect to database: {}", e))
        })?;

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| StorageError::ConnectionError(format!("Migration failed: {}", e)))?;

        Ok(Self::new(pool))
    }
}

#[async_trait]
impl DiagramStore for PostgresDiagramStore {
    fn backend_name(&self) -> &'static str {
        "postgres"
    }

    async fn create_diagram(
        &self,
        request: CreateUmlDiagramRequest,
    ) -> Result<UmlDiagram, StorageError> {
        let row: DiagramRow = sqlx::query_as(
            r#"
            INSERT INTO uml_diagrams (name, diagram)
            VALUES ($1, $2)
            RETURNING id, name, diagram
            "#,
        )
        .bind(&request.name)
        .bind(Json(&request.diagram))
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn get_diagram(&self, id: i64) -> Result<Option<UmlDiagram>, StorageError> {
        let row: Option<DiagramRow> = sqlx::query_as(
            r#"
            SELECT id, name, diagram
            FROM uml_diagrams
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(UmlDiagram::from))
    }

    async fn update_diagram(
        &self,
        id: i64,
        changes: UpdateUmlDiagramRequest,
    ) -> Result<UmlDiagram, StorageError> {
        let row: Option<DiagramRow> = sqlx::query_as(
            r#"
            UPDATE uml_diagrams
            SET name = COALESCE($1, name), diagram = COALESCE($2, diagram)
            WHERE id = $3
            RETURNING id, name, diagram
            "#,
        )
        .bind(changes.name)
        .bind(changes.diagram.map(Json))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(UmlDiagram::from)
            .ok_or_else(|| StorageError::diagram_not_found(id))
    }

    async fn delete_diagram(&self, id: i64) -> Result<(), StorageError> {
        let rows_affected = sqlx::query(
            r#"
            DELETE FROM uml_diagrams
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?
        .rows_affected();

        if rows_affected == 0 {
            Err(StorageError::diagram_not_found(id))
        } else {
            Ok(())
        }
    }

    async fn list_diagrams(&self, query: &DiagramListQuery) -> Result<Vec<UmlDiagram>, StorageError> {
        let rows: Vec<DiagramRow> = sqlx::query_as(
            r#"
            SELECT id, name, diagram
            FROM uml_diagrams
            WHERE ($1::TEXT IS NULL OR name = $1)
            ORDER BY id
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(query.name.as_deref())
        .bind(query.effective_limit())
        .bind(query.effective_offset())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(UmlDiagram::from).collect())
    }
}
