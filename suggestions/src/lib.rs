//! Address Bar Suggestions
//!
//! Turns the query being typed into a bounded, ordered and deduplicated set
//! of suggestions drawn from browsing history, bookmarks, open tabs, internal
//! pages and the remote search-suggestion API.
//!
//! # Features
//! - Closed suggestion model shared by every source
//! - Pluggable tokenizer and scorer with a default implementation
//! - Ranking with open tabs first and per-kind top hits rules
//! - Naked-URL based deduplication and history-to-bookmark promotion
//! - Fixed output budget shared between top hits, remote and local groups
//! - Async container that drops results of superseded queries

pub mod api;
pub mod config;
pub mod container;
pub mod processing;
pub mod result;
pub mod scoring;
pub mod sources;
pub mod suggestion;

pub use api::*;
pub use config::*;
pub use container::*;
pub use processing::*;
pub use result::*;
pub use scoring::*;
pub use sources::*;
pub use suggestion::*;

// Re-export commonly used types
pub use address_bar_core::*;
