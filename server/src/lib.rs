//! Customer Registry Server
//!
//! 顧客レコードをメモリ内で管理するREST APIサーバー

#![warn(missing_docs)]

/// REST APIハンドラー
pub mod api;

/// CLIインターフェース
pub mod cli;

/// ロギング初期化ユーティリティ
pub mod logging;

/// 顧客レジストリ
pub mod registry;

/// axumサーバー起動・シャットダウン
pub mod server;

/// Shutdown controller
pub mod shutdown;

use customer_registry_common::config::ServerConfig;
use std::sync::Arc;

/// アプリケーション状態
#[derive(Clone)]
pub struct AppState {
    /// 顧客レジストリ
    pub registry: registry::CustomerRegistry,
    /// サーバー設定
    pub config: Arc<ServerConfig>,
    /// Cooperative shutdown controller
    pub shutdown: shutdown::ShutdownController,
}

impl AppState {
    /// レジストリと設定から状態を組み立てる
    pub fn new(registry: registry::CustomerRegistry, config: ServerConfig) -> Self {
        Self {
            registry,
            config: Arc::new(config),
            shutdown: shutdown::ShutdownController::default(),
        }
    }

    /// 設定に従ってレジストリを初期化し、状態を組み立てる
    pub fn from_config(config: ServerConfig) -> Self {
        let registry = if config.seed {
            registry::CustomerRegistry::with_seed()
        } else {
            registry::CustomerRegistry::new()
        };
        Self::new(registry, config)
    }
}
