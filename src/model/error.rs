//! Error types for the virtualization engine.
//!
//! Size descriptors are the one place the engine takes untrusted numeric
//! input from the host, and a bad size cannot be repaired locally: clamping
//! a non-positive extent to zero would silently break the strict
//! monotonicity of the offset table and every range query after it. The
//! engine therefore fails fast at build time instead.

use thiserror::Error;

/// Errors reported by the windowing engines.
///
/// All variants indicate a host contract violation detected while building
/// layout state. Momentary geometry oddities (zero-sized viewport during
/// initial layout, empty sequences) are *not* errors and resolve to empty
/// ranges instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// The size descriptor produced a non-positive or non-finite extent
    /// for an item.
    ///
    /// Raised during offset-table construction (variable sizing) or when a
    /// uniform item extent is installed (fixed sizing). The offending value
    /// is preserved for diagnostics.
    #[error("item {index} has invalid extent {size}: extents must be positive and finite")]
    InvalidItemSize {
        /// Index of the item whose size was rejected.
        index: usize,
        /// The rejected size value.
        size: f64,
    },

    /// A grid was configured with a non-positive or non-finite cell
    /// dimension.
    #[error("invalid grid cell extent {value} for {dimension}: extents must be positive and finite")]
    InvalidCellExtent {
        /// Which cell dimension was rejected ("width" or "height").
        dimension: &'static str,
        /// The rejected dimension value.
        value: f64,
    },

    /// A grid gap was negative or non-finite.
    ///
    /// Zero is a valid gap; negative gaps would make column arithmetic
    /// ambiguous.
    #[error("invalid grid gap {0}: gaps must be finite and >= 0")]
    InvalidGap(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_item_size_display_carries_index_and_value() {
        let err = EngineError::InvalidItemSize {
            index: 7,
            size: -3.5,
        };
        let msg = err.to_string();
        assert!(msg.contains("item 7"));
        assert!(msg.contains("-3.5"));
    }

    #[test]
    fn invalid_cell_extent_display_names_dimension() {
        let err = EngineError::InvalidCellExtent {
            dimension: "width",
            value: 0.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("width"));
        assert!(msg.contains("0"));
    }

    #[test]
    fn invalid_gap_display() {
        let err = EngineError::InvalidGap(-1.0);
        assert!(err.to_string().contains("-1"));
    }
}
