//! REST APIハンドラー
//!
//! 顧客CRUDとヘルプページ

/// 顧客CRUD
pub mod customers;
/// エラーレスポンス
pub mod error;
/// ヘルプ・インデックスページ
pub mod help;

use crate::AppState;
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

/// APIルーターを作成
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(help::index))
        .route("/help", get(help::show_help))
        .route(
            "/customers",
            get(customers::list_customers).post(customers::create_customer),
        )
        .route(
            "/customers/:id",
            get(customers::get_customer)
                .patch(customers::update_customer)
                .delete(customers::delete_customer),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
