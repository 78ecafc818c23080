// SPDX-License-Identifier: MIT

//! Rapid-entry endpoint tests: validation boundary and record lifecycle.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use tower::ServiceExt;

mod common;

fn post_training(payload: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/training")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_create_training_record() {
    let (app, state) = common::create_test_app();

    let response = app
        .oneshot(post_training(serde_json::json!({
            "item_id": "10m",
            "seconds": 4.1234,
            "note": "tailwind"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = common::body_json(response).await;
    assert_eq!(body["item_id"], "10m");
    assert_eq!(body["item_name"], "10m 測速");
    assert_eq!(body["seconds"], 4.1234);
    assert_eq!(body["note"], "tailwind");
    // Server derives the grouping date from its own clock
    let date_str = body["date_str"].as_str().unwrap();
    assert_eq!(date_str.len(), 10);

    // Prepended: newest record first
    let data = state.store.snapshot();
    assert_eq!(data.training.len(), 6);
    assert_eq!(data.training[0].id, body["id"].as_str().unwrap());
}

#[tokio::test]
async fn test_seconds_zero_is_rejected() {
    let (app, state) = common::create_test_app();

    let response = app
        .oneshot(post_training(serde_json::json!({
            "item_id": "10m",
            "seconds": 0.0
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    // Never stored
    assert_eq!(state.store.snapshot().training.len(), 5);
}

#[tokio::test]
async fn test_seconds_above_200_is_rejected() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(post_training(serde_json::json!({
            "item_id": "10m",
            "seconds": 200.001
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_seconds_exactly_200_is_accepted() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(post_training(serde_json::json!({
            "item_id": "pump",
            "seconds": 200.0
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_unknown_item_is_rejected() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(post_training(serde_json::json!({
            "item_id": "slalom",
            "seconds": 5.0
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_training_record() {
    let (app, state) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/training/t-3")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let data = state.store.snapshot();
    assert_eq!(data.training.len(), 4);
    assert!(data.training.iter().all(|t| t.id != "t-3"));
}

#[tokio::test]
async fn test_delete_missing_training_record_is_404() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/training/t-999")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
