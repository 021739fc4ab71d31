use crate::error::AppError;
use crate::state::SharedState;
use axum::{extract::State, response::Json};
use tokio_util::sync::CancellationToken;
use twitter::SearchResponse;

pub async fn search(State(state): State<SharedState>) -> Result<Json<SearchResponse>, AppError> {
    let query = state.config.search_query.as_str();
    tracing::info!("Received search request (query={})", query);

    // クライアントが切断してこの future が捨てられたら上流の呼び出しも止める
    let cancel = CancellationToken::new();
    let _guard = cancel.clone().drop_guard();

    let res = state.searcher.search_recent_posts(&cancel, query).await?;

    tracing::info!("Relaying {} posts", res.data.len());
    Ok(Json(res))
}
