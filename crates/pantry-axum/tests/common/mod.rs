//! Shared helpers for pantry-axum integration tests.

// Each test binary uses a different subset of these helpers.
#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use pantry_axum::bootstrap::{ServerConfig, bootstrap};
use pantry_axum::routes::create_router;

pub const MULTIPART_BOUNDARY: &str = "pantry-test-boundary";

/// Router over a fresh in-memory store.
pub async fn test_app() -> Router {
    app_with_config(&ServerConfig::in_memory().with_port(0)).await
}

pub async fn app_with_config(config: &ServerConfig) -> Router {
    let ctx = bootstrap(config).await.unwrap();
    create_router(ctx, config)
}

/// Send a request and return the status with the raw body.
pub async fn send_raw(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, body.to_vec())
}

/// Send a request and decode the JSON response body.
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let (status, body) = send_raw(app, request).await;
    let json = serde_json::from_slice(&body)
        .unwrap_or_else(|e| panic!("non-JSON body ({e}): {}", String::from_utf8_lossy(&body)));
    (status, json)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn json_request(method: Method, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Build a multipart upload with a single `file` part.
pub fn upload_request(file_name: &str, contents: &str) -> Request<Body> {
    let body = format!(
        "--{MULTIPART_BOUNDARY}\r\n\
         Content-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\n\
         Content-Type: application/json\r\n\
         \r\n\
         {contents}\r\n\
         --{MULTIPART_BOUNDARY}--\r\n"
    );

    Request::builder()
        .method(Method::POST)
        .uri("/api/upload")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={MULTIPART_BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

/// Create an item through the API and return its assigned ID.
pub async fn create_item(app: &Router, item: &Value) -> i64 {
    let (status, body) = send(app, json_request(Method::POST, "/api/items", item)).await;
    assert_eq!(status, StatusCode::CREATED, "create failed: {body}");
    body["item"]["id"].as_i64().unwrap()
}
