use std::sync::Arc;
use std::time::Duration;
use twitter::{ClientConfig, PostSearcher, TwitterClient, DEFAULT_BASE_URL};

pub const DEFAULT_SEARCH_QUERY: &str = "ビットコイン";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// 起動時に一度だけ読み込む設定
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub search_query: String,
    /// None ならタイムアウトなし
    pub request_timeout: Option<Duration>,
    pub twitter: ClientConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let bearer_token = lookup("TWITTER_BEARER_TOKEN").unwrap_or_default();
        let base_url = lookup("TWITTER_API_URL")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let search_query =
            lookup("SEARCH_QUERY").unwrap_or_else(|| DEFAULT_SEARCH_QUERY.to_string());

        let timeout_secs = lookup("REQUEST_TIMEOUT_SECS")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);
        let request_timeout = (timeout_secs > 0).then(|| Duration::from_secs(timeout_secs));

        let port = lookup("PORT")
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Self {
            port,
            search_query,
            request_timeout,
            twitter: ClientConfig {
                bearer_token,
                base_url,
            },
        }
    }
}

pub type SharedState = AppState;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub searcher: Arc<dyn PostSearcher>,
}

impl AppState {
    /// 共有の HTTP クライアントから Twitter クライアントを組み立てる
    pub fn new(config: AppConfig, http_client: reqwest::Client) -> Self {
        let searcher = TwitterClient::new(http_client, config.twitter.clone());
        tracing::info!("Searching via {}", searcher.search_url());
        Self {
            config,
            searcher: Arc::new(searcher),
        }
    }

    pub fn with_searcher(config: AppConfig, searcher: Arc<dyn PostSearcher>) -> Self {
        Self { config, searcher }
    }
}
