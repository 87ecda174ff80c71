//! Visible-range resolution: viewport geometry → inclusive index range.
//!
//! One entry point, [`resolve`], shared by the list engine and (per row) the
//! grid engine. Fixed sizing resolves in O(1); variable sizing performs two
//! lower-bound searches over the offset table, O(log n). Overscan is counted
//! in items, not pixels, and padding never scans the sequence.

use crate::layout::sizing::Sizing;
use crate::model::{Viewport, VisibleRange};

/// Resolve the inclusive range of items intersecting the viewport, padded
/// by `overscan_count` items on each side and clamped to the sequence.
///
/// Boundary semantics are closed-open: item `i` occupies
/// `[offset_of(i), offset_of(i) + extent_of(i))`, and an item starting
/// exactly at a query boundary is included. The end boundary therefore
/// admits at most one item past the strictly-intersecting set, matching the
/// ceiling used by the fixed-size arithmetic.
///
/// Degenerate geometry resolves rather than erroring:
/// - an empty sequence yields `None`;
/// - a zero-extent viewport (pre-layout) collapses to the overscan
///   neighbourhood around the item at the scroll offset.
pub fn resolve(
    sizing: &Sizing,
    viewport: Viewport,
    overscan_count: usize,
) -> Option<VisibleRange> {
    let n = sizing.len();
    if n == 0 {
        return None;
    }

    let scroll = viewport.scroll_offset();
    let (start, end) = match sizing {
        Sizing::Fixed { extent, .. } => {
            let start = ((scroll / extent).floor() as usize).saturating_sub(overscan_count);
            let end = ((viewport.end_offset() / extent).ceil() as usize)
                .saturating_add(overscan_count);
            (start, end)
        }
        Sizing::Variable(table) => {
            let start = table.index_at(scroll).saturating_sub(overscan_count);
            let end = table
                .index_at(viewport.end_offset())
                .saturating_add(overscan_count);
            (start, end)
        }
    };

    let start = start.min(n - 1);
    let end = end.min(n - 1);
    Some(VisibleRange::new(start, end.max(start)))
}

// ===== Tests =====

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
