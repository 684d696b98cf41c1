use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use std::{
    fs,
    path::PathBuf,
    sync::Arc,
    time::{SystemTime, UNIX_EPOCH},
};
use tower::ServiceExt;

use sentinel_gateway::db::TableStore;
use sentinel_gateway::router::{GatewayState, gateway_router};

struct TempDb {
    path: PathBuf,
}

impl Drop for TempDb {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

async fn gateway(token: &str) -> (Router, TableStore, TempDb) {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();

    let mut temp_path = std::env::temp_dir();
    temp_path.push(format!(
        "sentinel-gateway-auth-{}-{}.sqlite",
        std::process::id(),
        nanos
    ));

    let store = TableStore::connect(&format!("sqlite:{}", temp_path.display()))
        .await
        .expect("failed to open test database");
    store.init_schema().await.expect("failed to init schema");

    let state = GatewayState::new(store.clone(), Arc::from(token));
    (gateway_router(state), store, TempDb { path: temp_path })
}

async fn get(app: &Router, path: &str, auth: Option<&str>) -> (StatusCode, String) {
    let mut builder = Request::builder().method("GET").uri(path);
    if let Some(value) = auth {
        builder = builder.header("authorization", value);
    }
    let resp = app
        .clone()
        .oneshot(builder.body(Body::empty()).expect("failed to build request"))
        .await
        .expect("request failed");
    let status = resp.status();
    let body = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    (status, String::from_utf8(body.to_vec()).expect("non-utf8 body"))
}

#[tokio::test]
async fn exact_bearer_token_reaches_the_handler() {
    let (app, _store, _db) = gateway("s3cret").await;

    let (status, body) = get(&app, "/api/persons", Some("Bearer s3cret")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "[]");
}

#[tokio::test]
async fn any_header_mismatch_is_rejected_with_401() {
    let (app, _store, _db) = gateway("s3cret").await;

    for bad in [
        Some("Bearer wrong"),
        Some("bearer s3cret"),
        Some("Bearer s3cret "),
        Some("Bearer  s3cret"),
        Some("s3cret"),
        None,
    ] {
        let (status, body) = get(&app, "/api/persons", bad).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "header: {bad:?}");
        assert_eq!(body, r#""Unauthorized""#, "header: {bad:?}");
    }
}

#[tokio::test]
async fn unset_secret_disables_every_protected_route() {
    let (app, _store, _db) = gateway("").await;

    for path in ["/api/persons", "/api/events", "/api/all"] {
        let (status, body) = get(&app, path, Some("Bearer anything")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "path: {path}");
        assert_eq!(body, r#""API_TOKEN not configured""#, "path: {path}");

        let (status, _) = get(&app, path, None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "path: {path}");
    }
}

#[tokio::test]
async fn index_route_is_unprotected_and_lists_endpoints() {
    let (app, _store, _db) = gateway("s3cret").await;

    let (status, body) = get(&app, "/", None).await;
    assert_eq!(status, StatusCode::OK);

    let value: serde_json::Value = serde_json::from_str(&body).expect("body was not JSON");
    assert_eq!(value["status"], "ok");
    let endpoints = value["endpoints"].as_array().expect("endpoints missing");
    assert!(endpoints.iter().any(|e| e == "/api/persons"));
    assert!(endpoints.iter().any(|e| e == "/api/all"));
    assert_eq!(endpoints.len(), 7);
}
