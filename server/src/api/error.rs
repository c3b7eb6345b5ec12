//! APIエラーレスポンス型
//!
//! axum用の共通エラーハンドリング

use axum::{http::StatusCode, response::IntoResponse, Json};
use customer_registry_common::error::RegistryError;
use serde_json::Value;

/// Axum用のエラーレスポンス型
#[derive(Debug)]
pub struct AppError(pub RegistryError);

impl From<RegistryError> for AppError {
    fn from(err: RegistryError) -> Self {
        AppError(err)
    }
}

impl AppError {
    /// エラーに対応するHTTPステータス
    pub fn status_code(&self) -> StatusCode {
        match &self.0 {
            RegistryError::NotFound(_) | RegistryError::InvalidId(_) => StatusCode::NOT_FOUND,
            RegistryError::Conflict(_) => StatusCode::CONFLICT,
            RegistryError::MalformedInput(_) => StatusCode::BAD_REQUEST,
            RegistryError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();
        tracing::debug!(status = %status, error = %self.0, "request failed");

        // NotFound/Conflictは本文null、それ以外は外部向けメッセージの文字列のみ
        let body = match &self.0 {
            RegistryError::NotFound(_)
            | RegistryError::InvalidId(_)
            | RegistryError::Conflict(_) => Value::Null,
            other => Value::String(other.external_message().to_string()),
        };

        (status, Json(body)).into_response()
    }
}
