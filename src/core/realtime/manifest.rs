//! Tool manifest construction.
//!
//! Each tool the gateway can proxy has a fixed JSON-schema function
//! descriptor. The manifest advertised to the realtime model contains the
//! descriptors of exactly those tools whose `enabled` flag is set in the
//! persisted configuration.

use serde_json::{Value, json};

use crate::core::tools::ToolConfigStore;

/// Function descriptor for the weather tool.
fn weather_descriptor() -> Value {
    json!({
        "type": "function",
        "name": "get_weather",
        "description": "Get current weather and 7-day forecast for any location on Earth. Includes temperature, humidity, precipitation, and wind speed.",
        "parameters": {
            "type": "object",
            "description": "The location to get the weather for in English",
            "properties": {
                "location": {
                    "type": "string",
                    "description": "The city or location name to get weather for"
                }
            },
            "required": ["location"]
        }
    })
}

/// Function descriptor for the web-search tool.
fn search_descriptor() -> Value {
    json!({
        "type": "function",
        "name": "search_web",
        "description": "Search the web for current information about any topic",
        "parameters": {
            "type": "object",
            "properties": {
                "query": { "type": "string" }
            },
            "required": ["query"]
        }
    })
}

/// Build the list of tool descriptors enabled by a configuration document.
///
/// Unknown tools in the document are ignored; only the tools this gateway
/// actually proxies can be advertised.
pub fn enabled_tool_descriptors(config: &Value) -> Vec<Value> {
    let mut tools = Vec::new();
    if ToolConfigStore::is_enabled(config, "weather") {
        tools.push(weather_descriptor());
    }
    if ToolConfigStore::is_enabled(config, "search") {
        tools.push(search_descriptor());
    }
    tools
}
