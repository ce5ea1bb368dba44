//! Client UI shell.

use axum::response::Html;

/// The UI shell is compiled into the binary so `/` works regardless of the
/// working directory; everything else under `/static` is served from disk.
const INDEX_HTML: &str = include_str!("../../static/index.html");

/// Serve the voice-assistant UI shell.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
