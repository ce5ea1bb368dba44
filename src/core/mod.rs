//! Core adapters for everything the gateway relays.
//!
//! - `tools` - persisted tool-configuration store
//! - `realtime` - realtime-session bootstrapping against the voice provider
//! - `weather` - Open-Meteo geocoding + forecast adapter
//! - `search` - Serper web/image search adapter

pub mod realtime;
pub mod search;
pub mod tools;
pub mod weather;
