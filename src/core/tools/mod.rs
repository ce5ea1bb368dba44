//! Persisted tool configuration.
//!
//! A single flat JSON document (`{"<tool>": {"enabled": bool, ...}}`) stored
//! on disk. It is loaded on every read and overwritten wholesale on update;
//! there is no merge, no versioning, and no locking - last writer wins, which
//! is the intended behavior for a single-operator dev tool.

mod store;

pub use store::ToolConfigStore;
