//! Serper web-search adapter.
//!
//! Two sequential upstream calls per query: organic web search, then image
//! search with fixed locale parameters. Only the first organic hit survives,
//! enriched with the first image whose URL looks like an actual image.

mod client;
mod messages;

pub use client::{IMAGES_URL, SEARCH_URL, SearchClient};
pub use messages::SearchHit;
