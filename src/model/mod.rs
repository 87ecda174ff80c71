//! Domain types shared across the engine (pure).

pub mod error;
pub mod types;

// Re-export for convenience
pub use error::EngineError;
pub use types::{ItemBox, PositionedItem, TrackWidth, Viewport, VisibleRange};
