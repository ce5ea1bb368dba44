//! Realtime-session client.
//!
//! # API Reference
//!
//! - Endpoint: `POST <REALTIME_SESSION_URL>` (e.g.
//!   `https://api.openai.com/v1/realtime/sessions`)
//! - Auth: `Authorization: Bearer <provider key>`
//! - Body: model, voice, instructions, tool manifest, `tool_choice: "auto"`
//! - Response: opaque session JSON containing the ephemeral client secret;
//!   returned to the caller unmodified

use serde_json::{Value, json};
use tracing::info;

use crate::errors::AppResult;
use crate::utils::http::json_or_upstream_error;

/// Realtime model requested for every session.
pub const REALTIME_MODEL: &str = "gpt-4o-realtime-preview";

/// Voice used when the client does not pick one.
pub const DEFAULT_VOICE: &str = "echo";

/// System instructions sent with every session.
const SESSION_INSTRUCTIONS: &str = "You are a helpful assistant that can answer questions and help with tasks. \
You have access to real-time weather data and web search capabilities. \
When asked about the weather, provide the current temperature and humidity. Provide more information when asked. \
When asked about a forecast, provide it but say ranging from x to y degrees over the days. \
Never answer in markdown format. Plain text only with no markdown.";

/// Client for the upstream realtime-session endpoint.
pub struct RealtimeSessionClient {
    session_url: String,
    api_key: String,
}

impl RealtimeSessionClient {
    /// Create a client for a session endpoint and bearer credential.
    pub fn new(session_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            session_url: session_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Create a session, advertising the given tool descriptors.
    ///
    /// Returns the upstream JSON body verbatim. Non-2xx upstream answers map
    /// to `AppError::Upstream` with the original status and body; transport
    /// failures map to `AppError::Transport`. No retries.
    pub async fn create_session(&self, voice: &str, tools: Vec<Value>) -> AppResult<Value> {
        info!(voice, tools = tools.len(), "creating realtime session");

        let client = reqwest::Client::new();
        let response = client
            .post(&self.session_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&json!({
                "model": REALTIME_MODEL,
                "voice": voice,
                "instructions": SESSION_INSTRUCTIONS,
                "tools": tools,
                "tool_choice": "auto",
            }))
            .send()
            .await?;

        json_or_upstream_error(response).await
    }
}
