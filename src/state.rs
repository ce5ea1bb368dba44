//! Shared application state.

use crate::config::ServerConfig;
use crate::core::tools::ToolConfigStore;

/// State shared by every handler through `Arc<AppState>`.
///
/// Holds the startup configuration and the tool-config store bound to the
/// configured file path. Nothing else is shared across requests.
pub struct AppState {
    pub config: ServerConfig,
    pub tools: ToolConfigStore,
}

impl AppState {
    /// Create application state from a loaded configuration.
    pub fn new(config: ServerConfig) -> Self {
        let tools = ToolConfigStore::new(&config.tools_config_path);
        Self { config, tools }
    }
}
