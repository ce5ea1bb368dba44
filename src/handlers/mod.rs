//! HTTP request handlers
//!
//! This module organizes all API handlers into logical groups:
//! - `api` - Health check endpoint
//! - `search` - Web-search tool endpoint
//! - `session` - Realtime-session bootstrap endpoint
//! - `tools_config` - Tool configuration read/update endpoints
//! - `ui` - Client UI shell
//! - `weather` - Weather tool endpoint

pub mod api;
pub mod search;
pub mod session;
pub mod tools_config;
pub mod ui;
pub mod weather;
