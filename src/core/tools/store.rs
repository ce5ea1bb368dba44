use std::io::ErrorKind;
use std::path::PathBuf;

use serde_json::Value;

use crate::errors::{AppError, AppResult};

/// File-backed store for the tool configuration document.
///
/// The document stays weakly typed (`serde_json::Value`) at this boundary:
/// clients may persist arbitrary per-tool settings, and only the `enabled`
/// flag is interpreted - at manifest-construction time, not here. Tool names
/// are not validated against a known set.
#[derive(Debug, Clone)]
pub struct ToolConfigStore {
    path: PathBuf,
}

impl ToolConfigStore {
    /// Create a store bound to a config file path.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Load the configuration document.
    ///
    /// # Errors
    /// - [`AppError::NotFound`] when the file does not exist
    /// - [`AppError::Config`] when the file is not valid JSON
    /// - [`AppError::Io`] on any other read failure
    pub fn read(&self) -> AppResult<Value> {
        let raw = std::fs::read_to_string(&self.path).map_err(|err| {
            if err.kind() == ErrorKind::NotFound {
                AppError::NotFound(format!("{} not found", self.path.display()))
            } else {
                AppError::Io(err)
            }
        })?;

        serde_json::from_str(&raw).map_err(|err| {
            AppError::Config(format!("could not parse {}: {err}", self.path.display()))
        })
    }

    /// Overwrite the configuration document wholesale.
    ///
    /// A plain write, not an atomic rename: concurrent writers race and the
    /// last one wins.
    pub fn write(&self, config: &Value) -> AppResult<()> {
        let body = serde_json::to_string_pretty(config)
            .map_err(|err| AppError::Config(format!("could not serialize tools config: {err}")))?;
        std::fs::write(&self.path, body)?;
        Ok(())
    }

    /// Whether a tool's `enabled` flag is set in a configuration document.
    /// Missing tools and non-boolean flags count as disabled.
    pub fn is_enabled(config: &Value, tool: &str) -> bool {
        config
            .get(tool)
            .and_then(|entry| entry.get("enabled"))
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }
}
