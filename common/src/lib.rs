//! Customer Registry Common Library
//!
//! サーバーとテストで共有する型定義、エラー型、設定

#![warn(missing_docs)]

/// 共通型定義
pub mod types;

/// エラー型定義
pub mod error;

/// 設定管理
pub mod config;
