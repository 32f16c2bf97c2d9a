//! Integration Tests for API Endpoints
//!
//! Drives each policy's cache through the router the way a visualizer would.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use eviction_sim::{api::create_router, AppState, Config};
use serde_json::Value;
use tower::ServiceExt;

// == Helper Functions ==

fn create_test_app() -> Router {
    let state = AppState::new(3).unwrap();
    create_router(state)
}

fn create_preset_app() -> Router {
    let state = AppState::from_config(&Config::default()).unwrap();
    create_router(state)
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn send(app: &Router, method: &str, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    (status, body_to_json(response.into_body()).await)
}

async fn access(app: &Router, policy: &str, key: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(format!("/caches/{}/access", policy))
                .header("content-type", "application/json")
                .body(Body::from(format!(r#"{{"key":"{}"}}"#, key)))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    (status, body_to_json(response.into_body()).await)
}

fn keys(json: &Value) -> Vec<String> {
    json["entries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["key"].as_str().unwrap().to_string())
        .collect()
}

// == Policy Walkthroughs ==

#[tokio::test]
async fn test_fifo_evicts_oldest() {
    let app = create_test_app();
    for key in ["A", "B", "C"] {
        access(&app, "fifo", key).await;
    }

    let (status, json) = access(&app, "fifo", "D").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["hit"], false);
    assert_eq!(json["evicted"], "A");
    assert_eq!(keys(&json), vec!["B", "C", "D"]);
}

#[tokio::test]
async fn test_lru_refresh_protects_key() {
    let app = create_test_app();
    for key in ["A", "B", "C"] {
        access(&app, "lru", key).await;
    }

    let (_, hit) = access(&app, "lru", "A").await;
    assert_eq!(hit["hit"], true);
    assert!(hit["evicted"].is_null());

    let (_, json) = access(&app, "lru", "D").await;
    assert_eq!(json["evicted"], "B");
    assert_eq!(keys(&json), vec!["C", "A", "D"]);
}

#[tokio::test]
async fn test_lfu_preset_evicts_lowest_count() {
    let app = create_preset_app();

    let (_, json) = access(&app, "lfu", "D").await;
    assert_eq!(json["evicted"], "C");

    let entries = json["entries"].as_array().unwrap();
    let d = entries.iter().find(|e| e["key"] == "D").unwrap();
    assert_eq!(d["frequency"], 1);
}

#[tokio::test]
async fn test_lifo_and_mru_presets_evict_c() {
    let app = create_preset_app();

    let (_, lifo) = access(&app, "lifo", "D").await;
    assert_eq!(lifo["evicted"], "C");
    assert_eq!(keys(&lifo), vec!["A", "B", "D"]);

    let (_, mru) = access(&app, "mru", "D").await;
    assert_eq!(mru["evicted"], "C");
    assert_eq!(keys(&mru), vec!["A", "B", "D"]);
}

// == Snapshot, Reset, Scenario, Stats ==

#[tokio::test]
async fn test_snapshot_endpoint() {
    let app = create_preset_app();

    let (status, json) = send(&app, "GET", "/caches/lifo").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["policy"], "lifo");
    assert_eq!(json["capacity"], 3);
    assert_eq!(json["next_victim"], "C");
    assert_eq!(keys(&json), vec!["A", "B", "C"]);
}

#[tokio::test]
async fn test_reset_restarts_sequences() {
    let app = create_test_app();
    access(&app, "fifo", "A").await;
    access(&app, "fifo", "B").await;

    let (status, json) = send(&app, "POST", "/caches/fifo/reset").await;
    assert_eq!(status, StatusCode::OK);
    assert!(json["entries"].as_array().unwrap().is_empty());

    let (_, json) = access(&app, "fifo", "Z").await;
    assert_eq!(json["entries"][0]["insertion_sequence"], 0);
}

#[tokio::test]
async fn test_scenario_endpoint() {
    let app = create_test_app();

    let (status, json) = send(&app, "POST", "/caches/mru/scenario/hot-tail").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["next_victim"], "C");

    let (status, json) = send(&app, "POST", "/caches/mru/scenario/warm").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json["error"].as_str().unwrap().contains("warm"));
}

#[tokio::test]
async fn test_stats_endpoint() {
    let app = create_test_app();
    access(&app, "lru", "A").await;
    access(&app, "lru", "A").await;
    access(&app, "lru", "B").await;

    let (status, json) = send(&app, "GET", "/caches/lru/stats").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["hits"], 1);
    assert_eq!(json["misses"], 2);
    assert_eq!(json["evictions"], 0);
    assert_eq!(json["total_entries"], 2);
}

#[tokio::test]
async fn test_list_endpoint() {
    let app = create_preset_app();

    let (status, json) = send(&app, "GET", "/caches").await;
    assert_eq!(status, StatusCode::OK);

    let policies: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["policy"].as_str().unwrap())
        .collect();
    assert_eq!(policies, vec!["fifo", "lru", "lfu", "lifo", "mru"]);
}

// == Health & Error Handling ==

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_app();

    let (status, json) = send(&app, "GET", "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert!(json.get("timestamp").is_some());
}

#[tokio::test]
async fn test_unknown_policy() {
    let app = create_test_app();

    let (status, json) = access(&app, "arc", "A").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json["error"].as_str().unwrap().contains("arc"));
}

#[tokio::test]
async fn test_multi_char_key_rejected() {
    let app = create_test_app();

    let (status, json) = access(&app, "fifo", "AB").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json.get("error").is_some());
}

#[tokio::test]
async fn test_invalid_json_request() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/caches/fifo/access")
                .header("content-type", "application/json")
                .body(Body::from("not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}
