//! ヘルプ・インデックスページ

use crate::AppState;
use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
};

/// ヘルプ本文を組み立てる
pub fn help_text(port: u16) -> String {
    format!(
        r#"Hello there! :)
This is a simple demo API implementing a trivial customer relationship management backend.
Each customer has an entry as follows:

    Id        unsigned integer (client-chosen, unique)
    Name      string
    Role      string
    Email     string
    Phone     string
    Contacted bool

They are kept in an in-memory registry keyed by Id.

The API runs on port {port}. The following requests are available:
- GET    /customers       list all customers
- GET    /customers/{{id}}  get a single customer
- POST   /customers       create a customer
- PATCH  /customers/{{id}}  replace a customer
- DELETE /customers/{{id}}  delete a customer

Enjoy!
"#
    )
}

/// GET /help - ヘルプ
pub async fn show_help(State(state): State<AppState>) -> String {
    help_text(state.config.port)
}

/// GET / - 静的ディレクトリの index.html、無ければヘルプ
///
/// ファイルの中身はバイト列のまま返す（UTF-8でなくてもよい）。
pub async fn index(State(state): State<AppState>) -> Response {
    let path = state.config.static_dir.join("index.html");
    match tokio::fs::read(&path).await {
        Ok(contents) => Html(contents).into_response(),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "index page unavailable, serving help");
            help_text(state.config.port).into_response()
        }
    }
}
