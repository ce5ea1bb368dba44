use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers::{api, search, session, tools_config, ui, weather};
use crate::state::AppState;

/// Create the API router.
///
/// The static-file service is nested in `main.rs` because its directory
/// comes from configuration; `/static/tools_config` is registered here and
/// takes precedence over the file service's wildcard.
pub fn create_api_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(ui::index))
        .route("/health", get(api::health_check))
        .route("/session", get(session::create_session))
        .route("/weather/{location}", get(weather::get_weather))
        .route("/search/{query}", get(search::search_web))
        .route("/tools_config", get(tools_config::get_tools_config))
        .route(
            "/static/tools_config",
            get(tools_config::get_static_tools_config),
        )
        .route(
            "/update_tools_config",
            post(tools_config::update_tools_config),
        )
        .layer(TraceLayer::new_for_http())
}
