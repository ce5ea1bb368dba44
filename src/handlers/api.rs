//! Health check endpoint.

use axum::Json;
use serde_json::{Value, json};

/// Liveness probe. Returns service name and version.
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
