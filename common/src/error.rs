//! エラー型定義
//!
//! 統一エラー型（thiserror使用）

use crate::types::CustomerId;
use thiserror::Error;

/// レジストリのエラー型
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// 指定IDの顧客が存在しない
    #[error("Customer not found: {0}")]
    NotFound(CustomerId),

    /// パスのIDが顧客IDとして解釈できない（どのレコードも指さない）
    #[error("Invalid customer id: {0}")]
    InvalidId(String),

    /// 指定IDの顧客が既に存在する
    #[error("Customer already exists: {0}")]
    Conflict(CustomerId),

    /// リクエストボディが期待する形になっていない
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// 設定エラー
    #[error("Configuration error: {0}")]
    Config(String),
}

impl RegistryError {
    /// 外部クライアント向けの固定メッセージを返す
    ///
    /// 詳細は`Display`（`to_string()`）に含まれるが、そちらはサーバーログ専用。
    pub fn external_message(&self) -> &'static str {
        match self {
            Self::NotFound(_) | Self::InvalidId(_) => "Customer not found",
            Self::Conflict(_) => "Customer already exists",
            Self::MalformedInput(_) => "Malformed request body",
            Self::Config(_) => "Internal server error",
        }
    }
}

impl From<serde_json::Error> for RegistryError {
    fn from(err: serde_json::Error) -> Self {
        RegistryError::MalformedInput(err.to_string())
    }
}

/// パス上のIDを顧客IDに変換する
///
/// 10進の数字のみ受け付ける（空白や符号は不可）。
pub fn parse_customer_id(raw: &str) -> RegistryResult<CustomerId> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RegistryError::InvalidId(raw.to_string()));
    }
    raw.parse()
        .map_err(|_| RegistryError::InvalidId(raw.to_string()))
}

/// Result型エイリアス
pub type RegistryResult<T> = Result<T, RegistryError>;
