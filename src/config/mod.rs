//! Configuration module for the voicerelay server
//!
//! Configuration comes from environment variables (with a `.env` file loaded
//! in `main.rs` before this module runs) plus a handful of CLI overrides.
//! The three upstream credentials are required: startup aborts with a named
//! error when any of them is missing, so a misconfigured deployment fails
//! before it ever accepts a request.
//!
//! # Example
//! ```rust,no_run
//! use voicerelay::config::ServerConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! println!("Server listening on {}", config.address());
//! # Ok(())
//! # }
//! ```

use std::env;
use std::path::PathBuf;

/// Default bind host.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default bind port.
pub const DEFAULT_PORT: u16 = 8888;

/// Default path of the persisted tool configuration file.
pub const DEFAULT_TOOLS_CONFIG_PATH: &str = "tools_config.json";

/// Default directory served under `/static`.
pub const DEFAULT_STATIC_DIR: &str = "static";

/// Server configuration
///
/// Constructed once at startup and shared with handlers through `AppState`;
/// nothing reads the environment after this struct exists.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    // Server settings
    pub host: String,
    pub port: u16,

    /// Bearer credential for the realtime-session provider (`OPENAI_API_KEY`).
    pub provider_api_key: String,
    /// API key for the Serper web-search API (`SERPER_API_KEY`).
    pub search_api_key: String,
    /// Full URL of the upstream realtime-session endpoint
    /// (`REALTIME_SESSION_URL`, e.g. `https://api.openai.com/v1/realtime/sessions`).
    pub realtime_session_url: String,

    /// Path of the persisted tool configuration file.
    pub tools_config_path: PathBuf,
    /// Directory of static assets served under `/static`.
    pub static_dir: PathBuf,

    /// CORS allowed origins (comma-separated list or "*" for all).
    /// The browser client may be served from a different origin in
    /// development, so the default is "*".
    pub cors_allowed_origins: String,
}

/// Zeroize secret fields when the config is dropped so credentials do not
/// linger in freed memory.
impl Drop for ServerConfig {
    fn drop(&mut self) {
        use zeroize::Zeroize;

        self.provider_api_key.zeroize();
        self.search_api_key.zeroize();
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    /// Returns an error if any required credential (`OPENAI_API_KEY`,
    /// `SERPER_API_KEY`, `REALTIME_SESSION_URL`) is missing or empty, or if
    /// `PORT` is set to something that is not a port number.
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        let provider_api_key = require_env("OPENAI_API_KEY")?;
        let search_api_key = require_env("SERPER_API_KEY")?;
        let realtime_session_url = require_env("REALTIME_SESSION_URL")?;

        let host = env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| format!("invalid PORT value: {raw}"))?,
            Err(_) => DEFAULT_PORT,
        };

        let tools_config_path = env::var("TOOLS_CONFIG_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_TOOLS_CONFIG_PATH));
        let static_dir = env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_STATIC_DIR));

        let cors_allowed_origins =
            env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| "*".to_string());

        Ok(Self {
            host,
            port,
            provider_api_key,
            search_api_key,
            realtime_session_url,
            tools_config_path,
            static_dir,
            cors_allowed_origins,
        })
    }

    /// Get the server address as a string in the format "host:port".
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Read a required environment variable, treating empty values as absent.
fn require_env(name: &str) -> Result<String, String> {
    env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .ok_or_else(|| format!("{name} not found in environment variables"))
}
