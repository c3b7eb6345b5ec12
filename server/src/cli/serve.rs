//! serve サブコマンド
//!
//! レジストリサーバーを起動します。

use clap::Args;
use customer_registry_common::config::ServerConfig;
use std::path::PathBuf;

/// serve サブコマンドの引数
///
/// 指定したものだけが環境変数由来の設定を上書きする。
#[derive(Args, Debug, Clone, Default)]
pub struct ServeArgs {
    /// Listen port
    #[arg(short, long, env = "CUSTOMER_REGISTRY_PORT")]
    pub port: Option<u16>,

    /// Bind address
    #[arg(short = 'H', long, env = "CUSTOMER_REGISTRY_HOST")]
    pub host: Option<String>,

    /// Directory holding index.html served at /
    #[arg(long, env = "CUSTOMER_REGISTRY_STATIC_DIR")]
    pub static_dir: Option<PathBuf>,

    /// Start with an empty registry
    #[arg(long, default_value_t = false)]
    pub no_seed: bool,
}

impl ServeArgs {
    /// 引数で設定を上書きする
    pub fn apply(self, mut config: ServerConfig) -> ServerConfig {
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(dir) = self.static_dir {
            config.static_dir = dir;
        }
        if self.no_seed {
            config.seed = false;
        }
        config
    }
}
