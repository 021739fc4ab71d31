use std::net::SocketAddr;
use twitter_relay::app;
use twitter_relay::state::{AppConfig, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Log initialized");

    let config = AppConfig::from_env();

    if config.twitter.bearer_token.is_empty() {
        tracing::warn!("TWITTER_BEARER_TOKEN is not set. Searches will be rejected by the API.");
    }
    match config.request_timeout {
        Some(timeout) => tracing::info!("Outbound request timeout: {:?}", timeout),
        None => tracing::info!("Outbound request timeout disabled"),
    }
    tracing::info!(
        "Relaying search (query={}) to {}",
        config.search_query,
        config.twitter.base_url
    );

    let http_client = twitter_relay::build_http_client(&config)?;
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let app_state = AppState::new(config, http_client);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Relay listening on {}", addr);

    axum::serve(listener, app(app_state)).await?;

    Ok(())
}
