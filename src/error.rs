use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{error, warn};
use twitter::SearchError;

/// 検索の失敗をステータスコードに変換する
#[derive(Debug)]
pub struct AppError(pub SearchError);

impl AppError {
    pub fn status(&self) -> StatusCode {
        let err = &self.0;
        match err {
            _ if err.is_timeout() => StatusCode::GATEWAY_TIMEOUT,
            _ if err.is_transport() => StatusCode::BAD_GATEWAY,
            SearchError::Request { .. } | SearchError::Decode { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            // 上流の 4xx/5xx はそのまま返す
            SearchError::RequestFailure(failure)
                if failure.status.is_client_error() || failure.status.is_server_error() =>
            {
                failure.status
            }
            SearchError::RequestFailure(_)
            | SearchError::Transport { .. }
            | SearchError::Cancelled { .. } => StatusCode::BAD_GATEWAY,
        }
    }
}

impl From<SearchError> for AppError {
    fn from(err: SearchError) -> Self {
        AppError(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let err = self.0;

        match &err {
            SearchError::RequestFailure(_) => warn!("Upstream error: {}", err),
            _ => error!("Search failed: {:?}", err),
        }

        let mut body = json!({
            "error": err.to_string(),
        });

        if let Some(res) = err.response() {
            for (key, value) in [
                ("title", &res.title),
                ("detail", &res.detail),
                ("type", &res.error_type),
            ] {
                if let Some(value) = value {
                    body[key] = json!(value);
                }
            }
        }

        (status, Json(body)).into_response()
    }
}
