//! 設定管理
//!
//! ServerConfigと環境変数ヘルパー

use crate::error::{RegistryError, RegistryResult};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// ホストアドレスの環境変数
pub const ENV_HOST: &str = "CUSTOMER_REGISTRY_HOST";
/// ポート番号の環境変数
pub const ENV_PORT: &str = "CUSTOMER_REGISTRY_PORT";
/// 静的ファイルディレクトリの環境変数
pub const ENV_STATIC_DIR: &str = "CUSTOMER_REGISTRY_STATIC_DIR";
/// 初期レコード投入フラグの環境変数
pub const ENV_SEED: &str = "CUSTOMER_REGISTRY_SEED";

/// Get an environment variable with fallback to a deprecated name
///
/// If only the old (deprecated) variable name is set, returns its value
/// and logs a deprecation warning.
pub fn get_env_with_fallback(new_name: &str, old_name: &str) -> Option<String> {
    if let Ok(val) = std::env::var(new_name) {
        return Some(val);
    }
    if let Ok(val) = std::env::var(old_name) {
        tracing::warn!(
            "Environment variable '{}' is deprecated, use '{}' instead",
            old_name,
            new_name
        );
        return Some(val);
    }
    None
}

/// Get an environment variable with fallback and default value
pub fn get_env_with_fallback_or(new_name: &str, old_name: &str, default: &str) -> String {
    get_env_with_fallback(new_name, old_name).unwrap_or_else(|| default.to_string())
}

/// Get an environment variable with fallback, parsing to a specific type
///
/// Unlike a silent default, a value that is set but fails to parse is
/// reported as a configuration error.
pub fn get_env_with_fallback_parse<T: std::str::FromStr>(
    new_name: &str,
    old_name: &str,
    default: T,
) -> RegistryResult<T> {
    match get_env_with_fallback(new_name, old_name) {
        Some(raw) => raw.trim().parse().map_err(|_| {
            RegistryError::Config(format!("invalid value for {}: '{}'", new_name, raw))
        }),
        None => Ok(default),
    }
}

/// `true/1/yes/on` と `false/0/no/off` を真偽値として解釈する
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// サーバー設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// ホストアドレス (デフォルト: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// ポート番号 (デフォルト: 8000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// `GET /` で返す index.html を探すディレクトリ (デフォルト: "./static")
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,

    /// 起動時に初期レコードを投入するか (デフォルト: true)
    #[serde(default = "default_seed")]
    pub seed: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("./static")
}

fn default_seed() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
            seed: default_seed(),
        }
    }
}

impl ServerConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> RegistryResult<Self> {
        let host = get_env_with_fallback_or(ENV_HOST, "REGISTRY_HOST", &default_host());
        let port = get_env_with_fallback_parse(ENV_PORT, "PORT", default_port())?;
        let static_dir = std::env::var(ENV_STATIC_DIR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_static_dir());
        let seed = match std::env::var(ENV_SEED) {
            Ok(raw) => parse_flag(&raw).ok_or_else(|| {
                RegistryError::Config(format!("invalid value for {}: '{}'", ENV_SEED, raw))
            })?,
            Err(_) => default_seed(),
        };

        Ok(Self {
            host,
            port,
            static_dir,
            seed,
        })
    }

    /// バインドアドレス（"host:port"）
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
