//! Tool configuration endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use serde_json::{Value, json};
use tracing::info;

use crate::errors::AppResult;
use crate::state::AppState;

/// `GET /tools_config` - return the persisted configuration document.
pub async fn get_tools_config(State(state): State<Arc<AppState>>) -> AppResult<Json<Value>> {
    Ok(Json(state.tools.read()?))
}

/// `GET /static/tools_config` - same document, registered ahead of the
/// static-file fallback so it shadows any real file of that name.
pub async fn get_static_tools_config(State(state): State<Arc<AppState>>) -> AppResult<Json<Value>> {
    Ok(Json(state.tools.read()?))
}

/// `POST /update_tools_config` - overwrite the configuration document
/// wholesale with whatever JSON the client sent.
pub async fn update_tools_config(
    State(state): State<Arc<AppState>>,
    Json(config): Json<Value>,
) -> AppResult<Json<Value>> {
    state.tools.write(&config)?;
    info!("tools configuration updated");
    Ok(Json(
        json!({"message": "Tools configuration updated successfully"}),
    ))
}
