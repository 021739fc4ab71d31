use crate::structs::SearchResponse;
use reqwest::{StatusCode, Url};
use std::fmt;
use thiserror::Error;

/// search recent tweets 呼び出しの失敗
#[derive(Debug, Error)]
pub enum SearchError {
    /// リクエストを組み立てられなかった (base URL が不正など)
    #[error("{api_name} new request: {source}")]
    Request {
        api_name: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// 接続・タイムアウト・ボディ読み込みの失敗
    #[error("{api_name} do: {source}")]
    Transport {
        api_name: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{api_name}: cancelled")]
    Cancelled { api_name: &'static str },

    #[error("{api_name}: {source}")]
    Decode {
        api_name: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// 200 以外が返った。デコード済みのレスポンスも保持している
    #[error(transparent)]
    RequestFailure(Box<RequestFailure>),
}

impl SearchError {
    /// 上流にリクエストが届かなかった、または応答を受け取れなかった
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::Cancelled { .. })
    }

    pub fn is_timeout(&self) -> bool {
        match self {
            Self::Transport { source, .. } => source.is_timeout(),
            _ => false,
        }
    }

    /// RequestFailure の場合のみ、API が返したレスポンスを返す
    pub fn response(&self) -> Option<&SearchResponse> {
        match self {
            Self::RequestFailure(failure) => Some(&failure.response),
            _ => None,
        }
    }
}

/// API が 200 以外のステータスを返したことを表す
#[derive(Debug)]
pub struct RequestFailure {
    pub api_name: &'static str,
    pub status: StatusCode,
    pub url: Url,
    pub response: SearchResponse,
}

impl RequestFailure {
    /// "429 Too Many Requests" の形。標準の理由句が無いコードは数字だけ
    pub fn status_text(&self) -> String {
        match self.status.canonical_reason() {
            Some(reason) => format!("{} {}", self.status.as_u16(), reason),
            None => self.status.as_u16().to_string(),
        }
    }
}

impl fmt::Display for RequestFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} {}", self.api_name, self.status_text(), self.url)
    }
}

impl std::error::Error for RequestFailure {}
