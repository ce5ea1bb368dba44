//! Unified application error type.
//!
//! Every adapter and handler funnels its failures through [`AppError`] so the
//! HTTP layer renders a single envelope shape (`{"error": ..., "details": ...}`)
//! and maps each failure class to one status code:
//!
//! | Variant             | Status                  |
//! |---------------------|-------------------------|
//! | `NotFound`          | 404                     |
//! | `Upstream`          | mirrored upstream status|
//! | `MalformedUpstream` | 502                     |
//! | `Transport`         | 502                     |
//! | `Config`            | 500                     |
//! | `Io`                | 500                     |

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// Result alias used throughout the crate.
pub type AppResult<T> = Result<T, AppError>;

/// Gateway-wide error taxonomy.
#[derive(Debug, Error)]
pub enum AppError {
    /// A requested entity does not exist: the config file is absent, a
    /// location has no geocoding match, or a search produced no results.
    #[error("{0}")]
    NotFound(String),

    /// A dependent API answered with a non-2xx status. The original status
    /// and body are carried through to the client unchanged.
    #[error("upstream returned {status}")]
    Upstream { status: StatusCode, body: String },

    /// A dependent API answered 2xx but the payload violated an invariant
    /// the reshaping relies on (e.g. misaligned forecast arrays).
    #[error("malformed upstream payload: {0}")]
    MalformedUpstream(String),

    /// The request to a dependent API never completed: DNS, connect,
    /// timeout, or body-decoding failures from the HTTP client.
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Persisted configuration could not be parsed or serialized.
    #[error("configuration error: {0}")]
    Config(String),

    /// Filesystem failure other than a missing file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// JSON error envelope returned by every failing endpoint.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl AppError {
    /// Status code this error renders with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Upstream { status, .. } => *status,
            AppError::MalformedUpstream(_) | AppError::Transport(_) => StatusCode::BAD_GATEWAY,
            AppError::Config(_) | AppError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match self {
            AppError::Upstream { body, .. } => ErrorBody {
                error: format!("upstream returned {status}"),
                details: Some(body),
            },
            AppError::Transport(err) => ErrorBody {
                error: "upstream request failed".to_string(),
                details: Some(err.to_string()),
            },
            AppError::Io(err) => ErrorBody {
                error: "io error".to_string(),
                details: Some(err.to_string()),
            },
            other => ErrorBody {
                error: other.to_string(),
                details: None,
            },
        };

        if status.is_server_error() {
            tracing::error!(%status, error = %body.error, "request failed");
        }

        (status, Json(body)).into_response()
    }
}
