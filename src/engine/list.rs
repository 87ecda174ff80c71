//! List windowing engine.
//!
//! Owns the viewport state for one scrollable list, re-resolves the visible
//! range on every event, and reports the total content extent so hosts can
//! size their scroll container. Content replacement is wholesale: the
//! offset table is rebuilt, never patched, so hosts must only replace on
//! actual sequence/size changes - never per scroll event.

use tracing::debug;

use crate::config::EngineConfig;
use crate::layout::resolver::resolve;
use crate::layout::sizing::Sizing;
use crate::model::{
    EngineError, ItemBox, PositionedItem, TrackWidth, Viewport, VisibleRange,
};

/// Result of one synchronous recompute.
///
/// Returned from every event entry point; hosts render from `range` and
/// size their scroll content to `total_extent`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowUpdate {
    /// Items to materialize, or `None` when there is nothing to render.
    pub range: Option<VisibleRange>,
    /// Extent of the entire content strip.
    pub total_extent: f64,
    /// Edge-triggered end-of-content signal.
    ///
    /// `true` exactly once per approach: set when the viewport's far edge
    /// first comes within the configured threshold of `total_extent`, and
    /// not again until the boundary has been re-crossed from farther away.
    /// Holding a scroll position near the end does not re-fire.
    pub end_reached: bool,
}

/// Windowing engine for a 1D list.
///
/// Two states, both implicit: idle between events, resolving inside an
/// event call. Every operation completes synchronously before returning;
/// there is no queue and at most one recompute is ever in flight.
#[derive(Debug, Clone)]
pub struct ListEngine {
    sizing: Sizing,
    viewport: Viewport,
    overscan_count: usize,
    end_reached_threshold: f64,
    /// Armed means the next entry into the end zone may fire `end_reached`.
    end_armed: bool,
}

impl ListEngine {
    /// Create an engine with no content.
    ///
    /// Hosts install content via [`ListEngine::replace_items`] or
    /// [`ListEngine::replace_fixed`] and wire scroll/resize events to
    /// [`ListEngine::on_scroll`] / [`ListEngine::on_resize`].
    pub fn new(config: EngineConfig) -> Self {
        Self {
            sizing: Sizing::empty(),
            viewport: Viewport::default(),
            overscan_count: config.overscan_count,
            end_reached_threshold: config.end_reached_threshold,
            end_armed: true,
        }
    }

    /// Number of items currently covered.
    pub fn len(&self) -> usize {
        self.sizing.len()
    }

    /// Whether the engine currently covers no items.
    pub fn is_empty(&self) -> bool {
        self.sizing.is_empty()
    }

    /// Current viewport state.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Total extent of the content strip.
    pub fn total_extent(&self) -> f64 {
        self.sizing.total()
    }

    /// Largest scroll offset that keeps the viewport inside the content.
    pub fn max_scroll_offset(&self) -> f64 {
        (self.sizing.total() - self.viewport.extent()).max(0.0)
    }

    /// Replace the sequence with variable-size items.
    ///
    /// The only O(n) operation on this type; triggered by sequence or
    /// size-descriptor changes, never by scroll.
    ///
    /// # Errors
    ///
    /// Fails fast with [`EngineError::InvalidItemSize`] if `size_of`
    /// produces a non-positive or non-finite extent.
    pub fn replace_items<T>(
        &mut self,
        items: &[T],
        size_of: impl Fn(&T, usize) -> f64,
    ) -> Result<WindowUpdate, EngineError> {
        self.sizing = Sizing::variable(items, size_of)?;
        debug!(
            len = self.sizing.len(),
            total = self.sizing.total(),
            "rebuilt offset table"
        );
        Ok(self.recompute())
    }

    /// Replace the sequence with `len` uniform items of `extent` each.
    ///
    /// Skips the offset table entirely; range queries stay O(1).
    ///
    /// # Errors
    ///
    /// Fails fast with [`EngineError::InvalidItemSize`] if `extent` is
    /// non-positive or non-finite.
    pub fn replace_fixed(&mut self, len: usize, extent: f64) -> Result<WindowUpdate, EngineError> {
        self.sizing = Sizing::fixed(len, extent)?;
        debug!(len, extent, "installed fixed sizing");
        Ok(self.recompute())
    }

    /// Handle a scroll event: update viewport state, re-resolve.
    pub fn on_scroll(&mut self, scroll_offset: f64) -> WindowUpdate {
        self.viewport.set_scroll_offset(scroll_offset);
        self.recompute()
    }

    /// Handle a resize event: update viewport extent, re-resolve.
    pub fn on_resize(&mut self, viewport_extent: f64) -> WindowUpdate {
        self.viewport.set_extent(viewport_extent);
        self.recompute()
    }

    /// Clamp the current scroll offset so the viewport stays within the
    /// content, then re-resolve. Useful after shrinking replacements.
    pub fn clamp_scroll_to_content(&mut self) -> WindowUpdate {
        let clamped = self.viewport.scroll_offset().min(self.max_scroll_offset());
        self.viewport.set_scroll_offset(clamped);
        self.recompute()
    }

    /// Compute bounding boxes for every index in `range`.
    ///
    /// Pure function of the current sizing: `top` is the item's cumulative
    /// offset, `height` its extent, `left` 0, `width` fills the container.
    /// Cost is O(range length).
    ///
    /// # Panics
    ///
    /// Panics if `range` reaches past the current sequence length; ranges
    /// obtained from this engine's own updates are always in bounds.
    pub fn materialize(&self, range: VisibleRange) -> Vec<PositionedItem> {
        range
            .indices()
            .map(|index| PositionedItem {
                index,
                bounds: ItemBox {
                    top: self.sizing.offset_of(index),
                    left: 0.0,
                    width: TrackWidth::Fill,
                    height: self.sizing.extent_of(index),
                },
            })
            .collect()
    }

    fn recompute(&mut self) -> WindowUpdate {
        let range = resolve(&self.sizing, self.viewport, self.overscan_count);
        let total_extent = self.sizing.total();

        let distance_to_end = total_extent - self.viewport.end_offset();
        let near_end = total_extent > 0.0 && distance_to_end <= self.end_reached_threshold;
        let end_reached = near_end && self.end_armed;
        if end_reached {
            self.end_armed = false;
        } else if !near_end {
            self.end_armed = true;
        }

        WindowUpdate {
            range,
            total_extent,
            end_reached,
        }
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
