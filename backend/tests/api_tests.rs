use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use http_body_util::BodyExt; // for .collect()
use serde_json::Value;
use tower::ServiceExt; // for .oneshot()

mod helpers;

use helpers::{spawn_app, test_config, test_router};

async fn body_json(response: axum::response::Response) -> Value {
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body_bytes).expect("response body should be JSON")
}

#[tokio::test]
async fn root_get_is_echoed() {
    let app = test_router(test_config(4000));

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Hello from oRPC backend!");
    assert_eq!(body["path"], "/");
    assert_eq!(body["method"], "GET");
}

#[tokio::test]
async fn any_path_and_method_are_echoed() {
    let app = test_router(test_config(4000));

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/does/not/exist")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["path"], "/api/v1/does/not/exist");
    assert_eq!(body["method"], "POST");
}

#[tokio::test]
async fn query_strings_are_part_of_the_echoed_path() {
    let app = test_router(test_config(4000));

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/things/1?force=true")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["path"], "/things/1?force=true");
    assert_eq!(body["method"], "DELETE");
}

#[tokio::test]
async fn responses_are_json() {
    let app = test_router(test_config(4000));

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    assert!(content_type.starts_with("application/json"));
}

#[tokio::test]
async fn live_server_echoes_requests() {
    let (addr, client) = spawn_app().await;

    let response = client
        .put(format!("http://{}/live/check", addr))
        .send()
        .await
        .expect("request to test server should succeed");

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Hello from oRPC backend!");
    assert_eq!(body["path"], "/live/check");
    assert_eq!(body["method"], "PUT");
}
