//! Unit tests for the SQLite diagram store

use serde_json::json;
use tempfile::TempDir;
use uml_diagram_api::models::{CreateUmlDiagramRequest, DiagramListQuery, UpdateUmlDiagramRequest};
use uml_diagram_api::storage::{DiagramStore, SqliteDiagramStore};

#[tokio::test]
async fn test_crud_cycle() {
    let store = SqliteDiagramStore::open_in_memory().unwrap();
    let document = json!({"interfaces": [{"name": "Shape", "methods": [{"name": "area"}]}]});

    let created = store
        .create_diagram(CreateUmlDiagramRequest::new("Geometry", document.clone()))
        .await
        .unwrap();
    assert_eq!(created.id, 1);

    let fetched = store.get_diagram(created.id).await.unwrap().unwrap();
    assert_eq!(fetched, created);

    let updated = store
        .update_diagram(
            created.id,
            UpdateUmlDiagramRequest {
                name: Some("Geometry v2".to_string()),
                diagram: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.name, "Geometry v2");
    assert_eq!(updated.diagram, document);
    assert_eq!(store.get_diagram(created.id).await.unwrap().unwrap(), updated);

    store.delete_diagram(created.id).await.unwrap();
    assert!(store.get_diagram(created.id).await.unwrap().is_none());
    assert!(store.delete_diagram(created.id).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_update_missing_is_not_found() {
    let store = SqliteDiagramStore::open_in_memory().unwrap();
    let err = store
        .update_diagram(
            5,
            UpdateUmlDiagramRequest {
                name: Some("nope".to_string()),
                diagram: None,
            },
        )
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_json_values_round_trip() {
    let store = SqliteDiagramStore::open_in_memory().unwrap();
    let values = [
        json!("just a string"),
        json!(12.5),
        json!(true),
        json!([1, [2, [3]]]),
        json!({"unicode": "ünïcødé ✓", "nested": {"empty": {}, "list": []}}),
    ];

    for value in values {
        let created = store
            .create_diagram(CreateUmlDiagramRequest::new("v", value.clone()))
            .await
            .unwrap();
        let fetched = store.get_diagram(created.id).await.unwrap().unwrap();
        assert_eq!(fetched.diagram, value);
    }
}

#[tokio::test]
async fn test_number_precision_survives_storage() {
    let store = SqliteDiagramStore::open_in_memory().unwrap();
    // A float whose shortest representation is only recovered by an exact
    // parser, an integer wider than u64, and a long decimal.
    let raw = r#"[1.0715660391465826e-75,123456789012345678901234567890,3.14159265358979323846264338327950288]"#;
    let document: serde_json::Value = serde_json::from_str(raw).unwrap();

    let created = store
        .create_diagram(CreateUmlDiagramRequest::new("precise", document.clone()))
        .await
        .unwrap();
    let fetched = store.get_diagram(created.id).await.unwrap().unwrap();

    assert_eq!(fetched.diagram, document);
    assert_eq!(fetched.diagram.to_string(), raw);
}

#[tokio::test]
async fn test_ids_increase_and_are_not_reused() {
    let store = SqliteDiagramStore::open_in_memory().unwrap();
    let first = store
        .create_diagram(CreateUmlDiagramRequest::new("a", json!(1)))
        .await
        .unwrap();
    let second = store
        .create_diagram(CreateUmlDiagramRequest::new("b", json!(2)))
        .await
        .unwrap();
    assert!(second.id > first.id);

    store.delete_diagram(second.id).await.unwrap();
    let third = store
        .create_diagram(CreateUmlDiagramRequest::new("c", json!(3)))
        .await
        .unwrap();
    assert!(third.id > second.id);
}

#[tokio::test]
async fn test_persists_across_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("diagrams.db");

    let id = {
        let store = SqliteDiagramStore::open(&path).unwrap();
        store
            .create_diagram(CreateUmlDiagramRequest::new("Durable", json!({"a": 1})))
            .await
            .unwrap()
            .id
    };

    let reopened = SqliteDiagramStore::open(&path).unwrap();
    let fetched = reopened.get_diagram(id).await.unwrap().unwrap();
    assert_eq!(fetched.name, "Durable");
    assert_eq!(fetched.diagram, json!({"a": 1}));
}

#[tokio::test]
async fn test_list_filters_and_pages() {
    let store = SqliteDiagramStore::open_in_memory().unwrap();
    for name in ["a", "b", "a", "a"] {
        store
            .create_diagram(CreateUmlDiagramRequest::new(name, json!({})))
            .await
            .unwrap();
    }

    let all = store.list_diagrams(&DiagramListQuery::default()).await.unwrap();
    assert_eq!(all.len(), 4);
    assert!(all.windows(2).all(|w| w[0].id < w[1].id));

    let query = DiagramListQuery {
        name: Some("a".to_string()),
        limit: Some(1),
        offset: Some(1),
    };
    let page = store.list_diagrams(&query).await.unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].id, 3);
}
