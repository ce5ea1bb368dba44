//! Realtime-session bootstrap endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use serde::Deserialize;
use serde_json::Value;

use crate::core::realtime::{DEFAULT_VOICE, RealtimeSessionClient, enabled_tool_descriptors};
use crate::errors::AppResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SessionQuery {
    #[serde(default = "default_voice")]
    pub voice: String,
}

fn default_voice() -> String {
    DEFAULT_VOICE.to_string()
}

/// `GET /session?voice=<name>` - mint an ephemeral realtime session.
///
/// Reads the tool configuration, builds the manifest of enabled tools, and
/// forwards the session-creation request upstream. The upstream JSON body is
/// returned unmodified; upstream failures keep their status code.
pub async fn create_session(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SessionQuery>,
) -> AppResult<Json<Value>> {
    let tools_config = state.tools.read()?;
    let tools = enabled_tool_descriptors(&tools_config);

    let client = RealtimeSessionClient::new(
        &state.config.realtime_session_url,
        &state.config.provider_api_key,
    );
    let session = client.create_session(&query.voice, tools).await?;
    Ok(Json(session))
}
