//! HTTP response helpers shared by the provider adapters.

use reqwest::Response;
use serde::de::DeserializeOwned;

use crate::errors::{AppError, AppResult};

/// Decode a JSON response body, surfacing non-2xx answers as
/// [`AppError::Upstream`] with the original status and body attached.
///
/// Body-decoding failures on a 2xx answer map to [`AppError::Transport`]
/// through the `reqwest::Error` conversion.
pub async fn json_or_upstream_error<T: DeserializeOwned>(response: Response) -> AppResult<T> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(AppError::Upstream { status, body });
    }
    Ok(response.json().await?)
}
