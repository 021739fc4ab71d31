use crate::error::{RequestFailure, SearchError};
use crate::structs::SearchResponse;
use async_trait::async_trait;
use reqwest::{header::AUTHORIZATION, Client, Request, StatusCode};
use tokio_util::sync::CancellationToken;

/// エラーに載せる操作名
pub const API_NAME: &str = "search recent tweets";
pub const DEFAULT_BASE_URL: &str = "https://api.twitter.com";
const SEARCH_RECENT_PATH: &str = "/2/tweets/search/recent";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// 検証せずにそのまま送る。空でも良い (API 側で 401 になる)
    pub bearer_token: String,
    pub base_url: String,
}

impl ClientConfig {
    pub fn new(bearer_token: impl Into<String>) -> Self {
        Self {
            bearer_token: bearer_token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// 最近の投稿を検索する
///
/// ハンドラはこの trait 越しに検索するので、テストではモックに差し替えられる。
#[async_trait]
pub trait PostSearcher: Send + Sync {
    async fn search_recent_posts(
        &self,
        cancel: &CancellationToken,
        query: &str,
    ) -> Result<SearchResponse, SearchError>;
}

#[derive(Debug, Clone)]
pub struct TwitterClient {
    http: Client,
    bearer_token: String,
    search_url: String,
}

impl TwitterClient {
    /// `http` はコネクションプールごと共有される前提で外から渡す
    pub fn new(http: Client, config: ClientConfig) -> Self {
        let base_url = config.base_url.trim_end_matches('/');
        Self {
            http,
            bearer_token: config.bearer_token,
            search_url: format!("{}{}", base_url, SEARCH_RECENT_PATH),
        }
    }

    pub fn search_url(&self) -> &str {
        &self.search_url
    }

    fn build_request(&self, query: &str) -> Result<Request, SearchError> {
        self.http
            .get(&self.search_url)
            .header(AUTHORIZATION, format!("Bearer {}", self.bearer_token))
            .query(&[("query", query)])
            .build()
            .map_err(|source| SearchError::Request {
                api_name: API_NAME,
                source,
            })
    }
}

#[async_trait]
impl PostSearcher for TwitterClient {
    async fn search_recent_posts(
        &self,
        cancel: &CancellationToken,
        query: &str,
    ) -> Result<SearchResponse, SearchError> {
        let request = self.build_request(query)?;
        let url = request.url().clone();
        tracing::debug!("GET {}", url);

        let fetch = async {
            let res = self.http.execute(request).await?;
            let status = res.status();
            let body = res.bytes().await?;
            Ok::<_, reqwest::Error>((status, body))
        };

        // ボディの読み込み中にキャンセルされても即座に抜ける
        let (status, body) = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                return Err(SearchError::Cancelled { api_name: API_NAME });
            }
            res = fetch => res.map_err(|source| SearchError::Transport {
                api_name: API_NAME,
                source,
            })?,
        };

        let response: SearchResponse =
            serde_json::from_slice(&body).map_err(|source| SearchError::Decode {
                api_name: API_NAME,
                source,
            })?;

        if status != StatusCode::OK {
            return Err(SearchError::RequestFailure(Box::new(RequestFailure {
                api_name: API_NAME,
                status,
                url,
                response,
            })));
        }

        Ok(response)
    }
}
