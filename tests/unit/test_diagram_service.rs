//! Unit tests for the diagram service

use serde_json::json;
use std::sync::Arc;
use uml_diagram_api::models::uml_diagram::MAX_NAME_LENGTH;
use uml_diagram_api::models::{CreateUmlDiagramRequest, DiagramListQuery, UpdateUmlDiagramRequest};
use uml_diagram_api::services::DiagramService;
use uml_diagram_api::storage::{MemoryDiagramStore, StorageError};

fn service() -> DiagramService {
    DiagramService::new(Arc::new(MemoryDiagramStore::new()))
}

#[tokio::test]
async fn test_get_missing_is_not_found() {
    let service = service();
    assert_eq!(
        service.get(1).await.unwrap_err(),
        StorageError::diagram_not_found(1)
    );
}

#[tokio::test]
async fn test_invalid_create_does_not_touch_storage() {
    let service = service();

    let err = service
        .create(CreateUmlDiagramRequest::new(
            "n".repeat(MAX_NAME_LENGTH + 1),
            json!({}),
        ))
        .await
        .unwrap_err();
    assert!(matches!(err, StorageError::InvalidData(_)));

    let err = service
        .create(CreateUmlDiagramRequest::new("ok", json!(null)))
        .await
        .unwrap_err();
    assert!(matches!(err, StorageError::InvalidData(_)));

    assert!(service.list(&DiagramListQuery::default()).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_invalid_update_leaves_record_unchanged() {
    let service = service();
    let created = service
        .create(CreateUmlDiagramRequest::new("Keep", json!({"k": true})))
        .await
        .unwrap();

    let err = service
        .update(
            created.id,
            UpdateUmlDiagramRequest {
                name: Some("changed".to_string()),
                diagram: Some(json!(null)),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, StorageError::InvalidData(_)));
    assert_eq!(service.get(created.id).await.unwrap(), created);
}

#[tokio::test]
async fn test_empty_update_returns_current_record() {
    let service = service();
    let created = service
        .create(CreateUmlDiagramRequest::new("Same", json!([1])))
        .await
        .unwrap();

    let unchanged = service
        .update(created.id, UpdateUmlDiagramRequest::default())
        .await
        .unwrap();
    assert_eq!(unchanged, created);

    let err = service
        .update(created.id + 1, UpdateUmlDiagramRequest::default())
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_delete_then_get_is_not_found() {
    let service = service();
    let created = service
        .create(CreateUmlDiagramRequest::new("Temp", json!({})))
        .await
        .unwrap();

    service.delete(created.id).await.unwrap();
    assert!(service.get(created.id).await.unwrap_err().is_not_found());
    assert!(service.delete(created.id).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_display_returns_name() {
    let service = service();
    let created = service
        .create(CreateUmlDiagramRequest::new("Class Model", json!({})))
        .await
        .unwrap();

    assert_eq!(service.display(created.id).await.unwrap(), "Class Model");
    assert_eq!(service.backend_name(), "memory");
}
