//! Contract Test: DELETE /customers/:id

use crate::support::app::{build_app, send_json};
use axum::http::StatusCode;
use serde_json::Value;

/// DELETE /customers/1 - 残りの一覧が返り、以後のGETは404
#[tokio::test]
async fn test_delete_customer_success() {
    let (app, _) = build_app();

    let (status, body) = send_json(&app, "DELETE", "/customers/1", None).await;

    assert_eq!(status, StatusCode::OK);
    let remaining = body.as_array().expect("array response");
    assert_eq!(remaining.len(), 2);
    assert_eq!(remaining[0]["Id"], 0);
    assert_eq!(remaining[1]["Id"], 2);

    let (status, body) = send_json(&app, "GET", "/customers/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, Value::Null);
}

/// DELETE /customers/:id - 存在しないIDは404 + null
#[tokio::test]
async fn test_delete_customer_not_found() {
    let (app, state) = build_app();

    let (status, body) = send_json(&app, "DELETE", "/customers/8", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, Value::Null);
    assert_eq!(state.registry.len().await, 3);
}

/// DELETE /customers/:id - 2回目の削除は404
#[tokio::test]
async fn test_delete_customer_twice() {
    let (app, _) = build_app();

    let (first, _) = send_json(&app, "DELETE", "/customers/0", None).await;
    let (second, _) = send_json(&app, "DELETE", "/customers/0", None).await;

    assert_eq!(first, StatusCode::OK);
    assert_eq!(second, StatusCode::NOT_FOUND);
}

/// 削除後に同じIDで再登録できる
#[tokio::test]
async fn test_deleted_id_can_be_reused() {
    let (app, _) = build_app();

    send_json(&app, "DELETE", "/customers/0", None).await;
    let (status, body) = send_json(
        &app,
        "POST",
        "/customers",
        Some(r#"{"Id":0,"Name":"George Pig"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["Name"], "George Pig");
}
