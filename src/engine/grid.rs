//! Grid windowing engine.
//!
//! Two-dimensional analogue of the list engine: the scroll axis runs over
//! rows of uniform pitch, resolved with the same shared resolver, while the
//! cross axis slots a fixed number of columns derived from the container
//! width. Column count changes only when the host reports a container-width
//! change - never on scroll.

use tracing::debug;

use crate::config::EngineConfig;
use crate::layout::resolver::resolve;
use crate::layout::sizing::Sizing;
use crate::model::{
    EngineError, ItemBox, PositionedItem, TrackWidth, Viewport, VisibleRange,
};

/// Result of one grid recompute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridWindow {
    /// Visible row range, or `None` when the grid holds no items.
    pub rows: Option<VisibleRange>,
    /// Vertical extent of the whole grid.
    pub total_extent: f64,
}

/// Windowing engine for a 2D grid of uniform cells.
///
/// Linear item indices fill rows left-to-right, top-to-bottom:
/// `row = index / columns`, `col = index % columns`. The last row may be
/// partially filled; materialization stops there as soon as the index runs
/// past the sequence.
#[derive(Debug, Clone)]
pub struct GridEngine {
    len: usize,
    item_width: f64,
    item_height: f64,
    gap: f64,
    columns: usize,
    viewport: Viewport,
    overscan_count: usize,
}

impl GridEngine {
    /// Create a grid engine for cells of `item_width` x `item_height`.
    ///
    /// Starts with zero items and a single column; hosts call
    /// [`GridEngine::set_len`] and [`GridEngine::set_container_width`]
    /// before the first render.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidCellExtent`] for a non-positive or
    /// non-finite cell dimension, [`EngineError::InvalidGap`] for a
    /// negative or non-finite gap.
    pub fn new(
        config: EngineConfig,
        item_width: f64,
        item_height: f64,
    ) -> Result<Self, EngineError> {
        if !item_width.is_finite() || item_width <= 0.0 {
            return Err(EngineError::InvalidCellExtent {
                dimension: "width",
                value: item_width,
            });
        }
        if !item_height.is_finite() || item_height <= 0.0 {
            return Err(EngineError::InvalidCellExtent {
                dimension: "height",
                value: item_height,
            });
        }
        if !config.gap.is_finite() || config.gap < 0.0 {
            return Err(EngineError::InvalidGap(config.gap));
        }
        Ok(Self {
            len: 0,
            item_width,
            item_height,
            gap: config.gap,
            columns: 1,
            viewport: Viewport::default(),
            overscan_count: config.overscan_count,
        })
    }

    /// Number of items in the grid.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the grid holds no items.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current column count. Always at least 1.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of rows needed for the current length and column count.
    pub fn rows(&self) -> usize {
        self.len.div_ceil(self.columns)
    }

    /// Vertical extent of the whole grid.
    pub fn total_extent(&self) -> f64 {
        self.rows() as f64 * self.row_pitch()
    }

    /// Row containing the given linear index.
    pub fn row_of(&self, index: usize) -> usize {
        index / self.columns
    }

    /// Column position of the given linear index within its row.
    pub fn column_of(&self, index: usize) -> usize {
        index % self.columns
    }

    /// Replace the item count. Wholesale, like list replacement.
    pub fn set_len(&mut self, len: usize) -> GridWindow {
        self.len = len;
        self.recompute()
    }

    /// Recompute the column count from a new container width.
    ///
    /// `columns = max(1, floor((container_width - gap) / (item_width + gap)))`;
    /// a container narrower than one cell still yields one column, so
    /// progress is guaranteed. Not called on scroll.
    pub fn set_container_width(&mut self, container_width: f64) -> GridWindow {
        let usable = (container_width.max(0.0) - self.gap).max(0.0);
        let fit = (usable / (self.item_width + self.gap)).floor() as usize;
        let columns = fit.max(1);
        if columns != self.columns {
            debug!(columns, container_width, "grid column count changed");
            self.columns = columns;
        }
        self.recompute()
    }

    /// Handle a vertical scroll event.
    pub fn on_scroll(&mut self, scroll_offset: f64) -> GridWindow {
        self.viewport.set_scroll_offset(scroll_offset);
        self.recompute()
    }

    /// Handle a viewport-height resize event.
    pub fn on_resize(&mut self, viewport_extent: f64) -> GridWindow {
        self.viewport.set_extent(viewport_extent);
        self.recompute()
    }

    /// Vertical distance from one row's top to the next.
    fn row_pitch(&self) -> f64 {
        self.item_height + self.gap
    }

    /// Expand a visible row range into per-item bounding boxes.
    ///
    /// Each row contributes up to `columns()` boxes with
    /// `left = col * (item_width + gap)` and `top = row * (item_height + gap)`,
    /// stopping early within the last row once the linear index reaches the
    /// item count. Pure; O(rows * columns) over the window only.
    pub fn materialize(&self, rows: VisibleRange) -> Vec<PositionedItem> {
        let mut items = Vec::with_capacity(rows.len() * self.columns);
        let column_pitch = self.item_width + self.gap;
        for row in rows.indices() {
            let top = row as f64 * self.row_pitch();
            for col in 0..self.columns {
                let index = row * self.columns + col;
                if index >= self.len {
                    return items;
                }
                items.push(PositionedItem {
                    index,
                    bounds: ItemBox {
                        top,
                        left: col as f64 * column_pitch,
                        width: TrackWidth::Px(self.item_width),
                        height: self.item_height,
                    },
                });
            }
        }
        items
    }

    fn recompute(&self) -> GridWindow {
        let rows = self.rows();
        // The row axis reuses the shared resolver over a uniform row pitch.
        // Pitch positivity is guaranteed by the constructor's validation.
        let row_sizing = Sizing::Fixed {
            len: rows,
            extent: self.row_pitch(),
        };
        GridWindow {
            rows: resolve(&row_sizing, self.viewport, self.overscan_count),
            total_extent: self.total_extent(),
        }
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "grid_tests.rs"]
mod tests;
