//! Health, OpenAPI and middleware behaviour of the assembled application.

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{Value, json};
use std::sync::Arc;
use uml_diagram_api::config::ApiConfig;
use uml_diagram_api::routes::{AppState, create_app, create_app_state};
use uml_diagram_api::storage::SqliteDiagramStore;

#[tokio::test]
async fn test_health_endpoints() {
    let server = TestServer::new(create_app(create_app_state(), &ApiConfig::default())).unwrap();

    for path in ["/health", "/api/v1/health"] {
        let response = server.get(path).await;
        assert_eq!(response.status_code(), StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["storage"], "memory");
    }
}

#[tokio::test]
async fn test_openapi_document_lists_diagram_paths() {
    let server = TestServer::new(create_app(create_app_state(), &ApiConfig::default())).unwrap();

    let response = server.get("/api/v1/openapi.json").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert!(body["paths"].get("/api/v1/diagrams").is_some());
    assert!(body["paths"].get("/api/v1/diagrams/{id}").is_some());
    assert!(body["components"]["schemas"].get("UmlDiagram").is_some());
}

#[tokio::test]
async fn test_openapi_diagram_field_accepts_any_json() {
    let server = TestServer::new(create_app(create_app_state(), &ApiConfig::default())).unwrap();

    let body: Value = server.get("/api/v1/openapi.json").await.json();
    let schemas = &body["components"]["schemas"];
    for schema in ["UmlDiagram", "CreateUmlDiagramRequest", "ReplaceUmlDiagramRequest"] {
        let diagram = &schemas[schema]["properties"]["diagram"];
        assert!(diagram.is_object(), "{schema} has no diagram property");
        assert_ne!(diagram.get("type"), Some(&json!("object")), "{schema}");
    }
}

#[tokio::test]
async fn test_rate_limit_rejects_excess_requests() {
    let config = ApiConfig {
        rate_limit_per_minute: Some(2),
        ..ApiConfig::default()
    };
    let server = TestServer::new(create_app(create_app_state(), &config)).unwrap();

    assert_eq!(server.get("/health").await.status_code(), StatusCode::OK);
    assert_eq!(server.get("/health").await.status_code(), StatusCode::OK);

    let response = server.get("/health").await;
    assert_eq!(response.status_code(), StatusCode::TOO_MANY_REQUESTS);
    let body: Value = response.json();
    assert_eq!(body["status"], 429);
}

#[tokio::test]
async fn test_routes_over_sqlite_backend() {
    let store = Arc::new(SqliteDiagramStore::open_in_memory().unwrap());
    let server =
        TestServer::new(create_app(AppState::with_store(store), &ApiConfig::default())).unwrap();

    let response = server
        .post("/api/v1/diagrams")
        .json(&json!({"name": "Persisted", "diagram": {"enums": ["A", "B"]}}))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    let created: Value = response.json();

    let response = server
        .get(&format!("/api/v1/diagrams/{}", created["id"]))
        .await;
    let fetched: Value = response.json();
    assert_eq!(fetched, created);

    let health: Value = server.get("/health").await.json();
    assert_eq!(health["storage"], "sqlite");
}
