//! ロギング初期化
//!
//! `RUST_LOG` が無ければ `CUSTOMER_REGISTRY_LOG_LEVEL`、それも無ければ `info`。

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// ログレベルの環境変数
pub const ENV_LOG_LEVEL: &str = "CUSTOMER_REGISTRY_LOG_LEVEL";

fn default_directive() -> String {
    std::env::var(ENV_LOG_LEVEL).unwrap_or_else(|_| "info".to_string())
}

/// 環境変数からフィルタを組み立てる
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let directive = default_directive();
        EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("info"))
    })
}

/// グローバルsubscriberを設定する
///
/// 既に設定済みの場合はエラーを返す。
pub fn init() -> Result<(), tracing_subscriber::util::TryInitError> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(env_filter())
        .try_init()
}
