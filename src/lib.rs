//! Viewslice
//!
//! Windowed rendering engine ("virtualizer") for large ordered sequences.
//!
//! The crate computes which slice of a list or grid intersects a scrollable
//! viewport and where each visible item's bounding box sits, without ever
//! scanning the full sequence on the hot path. It follows a Pure Core /
//! Impure Shell architecture: `layout` and `engine` are pure and
//! renderer-agnostic, `view` is a ratatui demo host that drives them.
//!
//! Hosts own the item data. The engine is handed a sequence length plus a
//! size descriptor, answers `on_scroll`/`on_resize` events synchronously
//! with the new visible range and total content extent, and materializes
//! bounding boxes on request. See [`engine::ListEngine`] and
//! [`engine::GridEngine`] for the two entry points.

pub mod config;
pub mod engine;
pub mod layout;
pub mod logging;
pub mod model;
pub mod view;
