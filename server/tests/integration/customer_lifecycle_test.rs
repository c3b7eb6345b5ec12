//! Integration Test: 実ポートで起動したサーバーに対する一連の操作

use crate::support::http::spawn_server;
use customer_registry_common::{config::ServerConfig, types::Customer};
use customer_registry_server::AppState;
use futures::future::join_all;
use reqwest::StatusCode;
use serde_json::json;

fn test_state() -> AppState {
    AppState::from_config(ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        ..ServerConfig::default()
    })
}

/// 初期レコードに対するシナリオ: 取得、削除、衝突
#[tokio::test]
async fn test_seed_scenario_over_http() {
    let server = spawn_server(test_state()).await;
    let client = reqwest::Client::new();

    let response = client.get(server.url("/customers/2")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let mandy: Customer = response.json().await.unwrap();
    assert_eq!(mandy.name, "Mandy Mouse");
    assert!(mandy.contacted);

    let response = client
        .delete(server.url("/customers/1"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let remaining: Vec<Customer> = response.json().await.unwrap();
    assert_eq!(remaining.len(), 2);

    let response = client.get(server.url("/customers/1")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = client
        .post(server.url("/customers"))
        .json(&json!({ "Id": 0, "Name": "Peppa Pig Again" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    server.stop().await.unwrap();
}

/// 登録→更新→削除
#[tokio::test]
async fn test_create_update_delete_over_http() {
    let server = spawn_server(test_state()).await;
    let client = reqwest::Client::new();

    let george = Customer {
        id: 4,
        name: "George Pig".to_string(),
        role: "Little brother".to_string(),
        email: "george.pig@somewhere.in.uk".to_string(),
        phone: "+44-00-11223-34".to_string(),
        contacted: false,
    };

    let response = client
        .post(server.url("/customers"))
        .json(&george)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(response.json::<Customer>().await.unwrap(), george);

    let contacted = Customer {
        contacted: true,
        ..george.clone()
    };
    let response = client
        .patch(server.url("/customers/4"))
        .json(&contacted)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let fetched: Customer = client
        .get(server.url("/customers/4"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched, contacted);

    let response = client
        .delete(server.url("/customers/4"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let all: Vec<Customer> = client
        .get(server.url("/customers"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(all.len(), 3);

    server.stop().await.unwrap();
}

/// 同じIDへの同時登録はちょうど1件だけ成功する
#[tokio::test]
async fn test_concurrent_creates_over_http() {
    let server = spawn_server(test_state()).await;
    let client = reqwest::Client::new();

    let requests = (0..8).map(|n| {
        let client = client.clone();
        let url = server.url("/customers");
        async move {
            client
                .post(url)
                .json(&json!({ "Id": 50, "Name": format!("Racer {}", n) }))
                .send()
                .await
                .unwrap()
                .status()
        }
    });
    let statuses: Vec<StatusCode> = join_all(requests).await;

    let created = statuses
        .iter()
        .filter(|s| **s == StatusCode::CREATED)
        .count();
    let conflicts = statuses
        .iter()
        .filter(|s| **s == StatusCode::CONFLICT)
        .count();
    assert_eq!(created, 1);
    assert_eq!(conflicts, 7);

    server.stop().await.unwrap();
}
