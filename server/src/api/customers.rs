//! 顧客管理APIハンドラー
//!
//! `/customers` 配下のCRUD

use super::error::AppError;
use crate::AppState;
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use customer_registry_common::{
    error::{parse_customer_id, RegistryError},
    types::Customer,
};

/// リクエストボディを顧客レコードとして解釈する
///
/// 欠けたフィールドはゼロ値。JSONとして読めない、または型が合わない場合は
/// `MalformedInput`。
fn parse_payload(body: &Bytes) -> Result<Customer, AppError> {
    serde_json::from_slice::<Customer>(body).map_err(|e| {
        tracing::warn!(error = %e, "failed to parse customer payload");
        AppError(RegistryError::from(e))
    })
}

/// GET /customers - 顧客一覧
pub async fn list_customers(State(state): State<AppState>) -> Json<Vec<Customer>> {
    let customers = state.registry.list().await;
    tracing::debug!(count = customers.len(), "listed customers");
    Json(customers)
}

/// GET /customers/:id - 顧客取得
pub async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Customer>, AppError> {
    let id = parse_customer_id(&id)?;
    let customer = state.registry.get(id).await?;
    Ok(Json(customer))
}

/// POST /customers - 顧客登録
pub async fn create_customer(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Customer>), AppError> {
    let payload = parse_payload(&body)?;
    let created = state.registry.create(payload).await?;
    tracing::info!(id = created.id, name = %created.name, "customer created");
    Ok((StatusCode::CREATED, Json(created)))
}

/// PATCH /customers/:id - 顧客更新（全体置換）
pub async fn update_customer(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<(StatusCode, Json<Customer>), AppError> {
    let id = parse_customer_id(&id)?;
    let payload = parse_payload(&body)?;
    let updated = state.registry.update(id, payload).await?;
    tracing::info!(id, "customer updated");
    Ok((StatusCode::CREATED, Json(updated)))
}

/// DELETE /customers/:id - 顧客削除（残りの一覧を返す）
pub async fn delete_customer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Customer>>, AppError> {
    let id = parse_customer_id(&id)?;
    let remaining = state.registry.delete(id).await?;
    tracing::info!(id, remaining = remaining.len(), "customer deleted");
    Ok(Json(remaining))
}
