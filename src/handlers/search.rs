//! Web-search tool endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};

use crate::core::search::{SearchClient, SearchHit};
use crate::errors::AppResult;
use crate::state::AppState;

/// `GET /search/{query}` - first organic hit with an optional image.
pub async fn search_web(
    State(state): State<Arc<AppState>>,
    Path(query): Path<String>,
) -> AppResult<Json<SearchHit>> {
    let hit = SearchClient::new(&state.config.search_api_key)
        .search_web(&query)
        .await?;
    Ok(Json(hit))
}
