//! Realtime-session bootstrapping.
//!
//! The browser client never holds the provider credential. Instead it asks
//! this gateway for an ephemeral session: the gateway assembles a tool
//! manifest from the persisted tool configuration, forwards a
//! session-creation request to the provider's realtime endpoint with the
//! server-side bearer key, and hands the provider's JSON body back verbatim.

mod client;
mod manifest;

pub use client::{DEFAULT_VOICE, REALTIME_MODEL, RealtimeSessionClient};
pub use manifest::enabled_tool_descriptors;
