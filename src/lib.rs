pub mod error;
pub mod handlers;
pub mod state;

use axum::{routing::get, Router};
use state::{AppConfig, SharedState};
use tower_http::trace::TraceLayer;

pub fn app(state: SharedState) -> Router {
    Router::new()
        .route("/search", get(handlers::search))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// 上流呼び出し用の HTTP クライアント。コネクションプールは全リクエストで共有する
pub fn build_http_client(config: &AppConfig) -> reqwest::Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder().user_agent(concat!(
        env!("CARGO_PKG_NAME"),
        "/",
        env!("CARGO_PKG_VERSION")
    ));

    if let Some(timeout) = config.request_timeout {
        builder = builder.timeout(timeout);
    }

    builder.build()
}
