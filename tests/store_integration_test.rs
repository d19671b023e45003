use httpmock::prelude::*;
use serde_json::json;
use social_graph::app::export::export_state;
use social_graph::domain::model::EdgeKey;
use social_graph::{ApiClient, ClientConfig, SocialGraphError, SocialStore};
use tempfile::TempDir;

fn graph_body() -> serde_json::Value {
    json!({
        "nodes": [
            {"id": "4:db:0", "name": "Ana", "group": "person"},
            {"id": "4:db:1", "name": "Beto", "group": "person"},
            {"id": "4:db:2", "name": "Carlos", "group": "person"},
            {"id": "4:db:3", "name": "Dani", "group": "person"}
        ],
        "links": [
            {"source": "4:db:0", "target": "4:db:1"},
            {"source": "4:db:1", "target": "4:db:2"},
            {"source": "4:db:2", "target": "4:db:3"},
            {"source": "4:db:3", "target": "4:db:0"},
            {"source": "4:db:0", "target": "4:db:2"}
        ]
    })
}

fn analytics_body() -> serde_json::Value {
    json!([
        {"name": "Carlos", "followers": 2},
        {"name": "Ana", "followers": 1},
        {"name": "Beto", "followers": 1},
        {"name": "Dani", "followers": 1}
    ])
}

fn store_for(server: &MockServer) -> SocialStore<ApiClient> {
    let client = ApiClient::new(&ClientConfig::new(server.url("/api"))).unwrap();
    SocialStore::new(client)
}

#[tokio::test]
async fn test_fetch_all_data_end_to_end() {
    let server = MockServer::start();
    let graph_mock = server.mock(|when, then| {
        when.method(GET).path("/api/graph-data");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(graph_body());
    });
    let analytics_mock = server.mock(|when, then| {
        when.method(GET).path("/api/analytics");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(analytics_body());
    });

    let store = store_for(&server);
    store.fetch_all_data().await;

    graph_mock.assert();
    analytics_mock.assert();

    let state = store.snapshot();
    assert_eq!(state.nodes.len(), 4);
    assert_eq!(state.nodes["4:db:2"].name, "Carlos");
    assert_eq!(state.edges.len(), 5);
    let labels: Vec<String> = state.edges.keys().map(|k| k.to_string()).collect();
    assert_eq!(labels, vec!["edge0", "edge1", "edge2", "edge3", "edge4"]);
    assert_eq!(state.edges[&EdgeKey(4)].target, "4:db:2");
    assert_eq!(serde_json::Value::Array(state.analytics_data), analytics_body());
    assert!(!state.is_loading);
}

#[tokio::test]
async fn test_fetch_all_data_swallows_server_errors() {
    let server = MockServer::start();
    let graph_mock = server.mock(|when, then| {
        when.method(GET).path("/api/graph-data");
        then.status(500);
    });
    let analytics_mock = server.mock(|when, then| {
        when.method(GET).path("/api/analytics");
        then.status(200).json_body(analytics_body());
    });

    let store = store_for(&server);
    store.fetch_all_data().await;

    graph_mock.assert();
    analytics_mock.assert_hits(0);
    assert!(store.nodes().is_empty());
    assert!(store.analytics_data().is_empty());
    assert!(!store.is_loading());
}

#[tokio::test]
async fn test_fetch_all_data_keeps_graph_when_analytics_fails() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/graph-data");
        then.status(200).json_body(graph_body());
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/analytics");
        then.status(502);
    });

    let store = store_for(&server);
    store.fetch_all_data().await;

    assert_eq!(store.nodes().len(), 4);
    assert_eq!(store.edges().len(), 5);
    assert!(store.analytics_data().is_empty());
    assert!(!store.is_loading());
}

#[tokio::test]
async fn test_fetch_all_data_survives_unreachable_backend() {
    // nothing listens on port 9 on a test host
    let client = ApiClient::new(&ClientConfig::new("http://127.0.0.1:9")).unwrap();
    let store = SocialStore::new(client);

    store.fetch_all_data().await;

    assert!(store.nodes().is_empty());
    assert!(!store.is_loading());
}

#[tokio::test]
async fn test_reset_and_seed_end_to_end() {
    let server = MockServer::start();
    let seed_mock = server.mock(|when, then| {
        when.method(POST).path("/api/seed");
        then.status(200).json_body(json!({
            "message": "Graph seeded",
            "nodes": 4,
            "relationships": 5
        }));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/graph-data");
        then.status(200).json_body(graph_body());
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/analytics");
        then.status(200).json_body(analytics_body());
    });

    let store = store_for(&server);
    let summary = store.reset_and_seed().await.unwrap();

    seed_mock.assert();
    assert_eq!(summary.relationships, 5);
    assert_eq!(store.nodes().len(), 4);
    assert_eq!(store.analytics_data().len(), 4);
    assert!(!store.is_loading());
}

#[tokio::test]
async fn test_reset_and_seed_rejects_on_seed_failure() {
    let server = MockServer::start();
    let seed_mock = server.mock(|when, then| {
        when.method(POST).path("/api/seed");
        then.status(500);
    });
    let graph_mock = server.mock(|when, then| {
        when.method(GET).path("/api/graph-data");
        then.status(200).json_body(graph_body());
    });

    let store = store_for(&server);
    let result = store.reset_and_seed().await;

    seed_mock.assert();
    graph_mock.assert_hits(0);
    assert!(matches!(
        result,
        Err(SocialGraphError::UnexpectedStatus { status: 500, .. })
    ));
    assert!(!store.is_loading());
}

#[tokio::test]
async fn test_fetch_then_export() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/graph-data");
        then.status(200).json_body(graph_body());
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/analytics");
        then.status(200).json_body(analytics_body());
    });

    let store = store_for(&server);
    store.fetch_all_data().await;

    let temp_dir = TempDir::new().unwrap();
    let summary = export_state(&store.snapshot(), temp_dir.path()).unwrap();

    assert_eq!(summary.node_count, 4);
    assert_eq!(summary.edge_count, 5);
    let edges_csv = std::fs::read_to_string(summary.edges_path).unwrap();
    assert_eq!(edges_csv.lines().count(), 6);
    assert!(edges_csv.contains("edge4,4:db:0,4:db:2"));
}
