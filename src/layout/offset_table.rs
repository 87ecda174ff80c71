//! OffsetTable - cumulative item offsets and lower_bound queries.
//!
//! Built in one O(n) pass whenever the host replaces the sequence or its
//! size descriptor; answers boundary queries in O(log n) afterwards. The
//! table is never patched incrementally - replacement is wholesale, which is
//! what keeps a plain prefix array sufficient here.
//!
//! # Complexity
//!
//! - `build`: O(n)
//! - `index_at`: O(log n)
//! - `offset_of`, `extent_of`, `total`, `len`: O(1)

use crate::model::EngineError;

/// Cumulative-offset table over a strip of variable-size items.
///
/// Holds `n + 1` offsets where `offsets[i]` is the summed extent of items
/// `[0, i)`; `offsets[0] == 0.0` and `offsets[n]` is the total content
/// extent. Item `i` occupies the closed-open interval
/// `[offsets[i], offsets[i+1])`.
///
/// Strict monotonicity (`offsets[i] < offsets[i+1]`) is guaranteed by
/// construction: [`OffsetTable::build`] rejects non-positive sizes instead
/// of clamping them.
#[derive(Debug, Clone, PartialEq)]
pub struct OffsetTable {
    /// Prefix offsets, length `n + 1`. First element is always 0.0.
    offsets: Vec<f64>,
}

impl OffsetTable {
    /// Build a table from a sequence and a per-item size function.
    ///
    /// Single linear pass accumulating `size_of(item, index)`; the running
    /// total is pushed before each item's size is added.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidItemSize`] for any non-positive or
    /// non-finite size. Nothing is clamped: a zero-or-negative extent would
    /// silently break monotonicity and every boundary query after it.
    ///
    /// # Examples
    ///
    /// ```
    /// # use viewslice::layout::offset_table::OffsetTable;
    /// let table = OffsetTable::build(&[20.0, 40.0, 60.0, 20.0], |s, _| *s).unwrap();
    /// assert_eq!(table.len(), 4);
    /// assert_eq!(table.total(), 140.0);
    /// assert_eq!(table.offset_of(2), 60.0);
    /// ```
    pub fn build<T>(
        items: &[T],
        size_of: impl Fn(&T, usize) -> f64,
    ) -> Result<Self, EngineError> {
        let mut offsets = Vec::with_capacity(items.len() + 1);
        let mut running = 0.0_f64;
        for (index, item) in items.iter().enumerate() {
            let size = size_of(item, index);
            if !size.is_finite() || size <= 0.0 {
                return Err(EngineError::InvalidItemSize { index, size });
            }
            offsets.push(running);
            running += size;
        }
        offsets.push(running);
        Ok(Self { offsets })
    }

    /// Number of items covered by the table.
    pub fn len(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Whether the table covers no items.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total extent of the whole strip (`offsets[n]`).
    pub fn total(&self) -> f64 {
        // The table always holds at least offsets[0] = 0.0.
        self.offsets[self.offsets.len() - 1]
    }

    /// Offset of the start of item `index` from the start of the strip.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn offset_of(&self, index: usize) -> f64 {
        assert!(
            index < self.len(),
            "index {} out of bounds (len: {})",
            index,
            self.len()
        );
        self.offsets[index]
    }

    /// Extent of item `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn extent_of(&self, index: usize) -> f64 {
        assert!(
            index < self.len(),
            "index {} out of bounds (len: {})",
            index,
            self.len()
        );
        self.offsets[index + 1] - self.offsets[index]
    }

    /// Index of the item whose interval contains `offset`.
    ///
    /// This is the single lower-bound routine shared by both boundary
    /// computations of the resolver. Closed-open semantics: an item whose
    /// interval *starts* exactly at `offset` is the one returned.
    ///
    /// Out-of-range offsets clamp to the first/last item; an empty table
    /// returns 0.
    ///
    /// # Examples
    ///
    /// ```
    /// # use viewslice::layout::offset_table::OffsetTable;
    /// let table = OffsetTable::build(&[20.0, 40.0, 60.0, 20.0], |s, _| *s).unwrap();
    /// // Intervals: [0,20) [20,60) [60,120) [120,140)
    /// assert_eq!(table.index_at(0.0), 0);
    /// assert_eq!(table.index_at(19.9), 0);
    /// assert_eq!(table.index_at(20.0), 1);
    /// assert_eq!(table.index_at(60.0), 2);
    /// assert_eq!(table.index_at(1000.0), 3);
    /// ```
    pub fn index_at(&self, offset: f64) -> usize {
        let n = self.len();
        if n == 0 {
            return 0;
        }
        let target = offset.max(0.0);
        // Interior starts are offsets[1..n]; counting those at or before the
        // target yields the containing item's index.
        let idx = self.offsets[1..n].partition_point(|&start| start <= target);
        idx.min(n - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn table_of(sizes: &[f64]) -> OffsetTable {
        OffsetTable::build(sizes, |s, _| *s).expect("sizes are valid")
    }

    #[test]
    fn empty_sequence_yields_single_zero_offset() {
        let no_items: [f64; 0] = [];
        let table = OffsetTable::build(&no_items, |s, _| *s).unwrap();
        assert_eq!(table.len(), 0);
        assert!(table.is_empty());
        assert_eq!(table.total(), 0.0);
        assert_eq!(table.index_at(0.0), 0);
    }

    #[test]
    fn offsets_accumulate_left_to_right() {
        let table = table_of(&[3.0, 4.0, 5.0]);
        assert_eq!(table.offset_of(0), 0.0);
        assert_eq!(table.offset_of(1), 3.0);
        assert_eq!(table.offset_of(2), 7.0);
        assert_eq!(table.total(), 12.0);
        assert_eq!(table.extent_of(1), 4.0);
    }

    #[test]
    fn zero_size_is_rejected() {
        let err = OffsetTable::build(&[10.0, 0.0], |s, _| *s).unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidItemSize {
                index: 1,
                size: 0.0
            }
        );
    }

    #[test]
    fn negative_size_is_rejected() {
        let err = OffsetTable::build(&[10.0, -2.0, 5.0], |s, _| *s).unwrap_err();
        assert!(matches!(
            err,
            EngineError::InvalidItemSize { index: 1, .. }
        ));
    }

    #[test]
    fn nan_size_is_rejected() {
        let err = OffsetTable::build(&[10.0, f64::NAN], |s, _| *s).unwrap_err();
        assert!(matches!(
            err,
            EngineError::InvalidItemSize { index: 1, .. }
        ));
    }

    #[test]
    fn index_at_boundary_belongs_to_the_starting_item() {
        let table = table_of(&[10.0, 20.0, 15.0]);
        // Intervals: [0,10) [10,30) [30,45)
        assert_eq!(table.index_at(0.0), 0);
        assert_eq!(table.index_at(5.0), 0);
        assert_eq!(table.index_at(10.0), 1);
        assert_eq!(table.index_at(29.9), 1);
        assert_eq!(table.index_at(30.0), 2);
        assert_eq!(table.index_at(44.9), 2);
    }

    #[test]
    fn index_at_clamps_out_of_range_offsets() {
        let table = table_of(&[5.0, 5.0, 5.0]);
        assert_eq!(table.index_at(-10.0), 0);
        assert_eq!(table.index_at(15.0), 2);
        assert_eq!(table.index_at(100.0), 2);
    }

    proptest! {
        /// Offsets are strictly increasing for positive sizes.
        #[test]
        fn prop_offsets_strictly_increase(sizes in prop::collection::vec(0.5f64..=100.0, 1..64)) {
            let table = table_of(&sizes);
            for i in 0..table.len() {
                prop_assert!(table.offset_of(i) < table.offset_of(i) + table.extent_of(i));
                if i + 1 < table.len() {
                    prop_assert!(table.offset_of(i) < table.offset_of(i + 1));
                }
            }
        }

        /// The total equals the last item's start plus its extent.
        #[test]
        fn prop_total_matches_last_interval_end(sizes in prop::collection::vec(0.5f64..=100.0, 1..64)) {
            let table = table_of(&sizes);
            let last = table.len() - 1;
            let end = table.offset_of(last) + table.extent_of(last);
            prop_assert!((table.total() - end).abs() < 1e-9);
        }

        /// index_at returns the item whose interval contains the query.
        #[test]
        fn prop_index_at_contains_query(
            sizes in prop::collection::vec(0.5f64..=100.0, 1..64),
            frac in 0.0f64..1.0,
        ) {
            let table = table_of(&sizes);
            let offset = table.total() * frac;
            let i = table.index_at(offset);
            prop_assert!(table.offset_of(i) <= offset);
            prop_assert!(offset < table.offset_of(i) + table.extent_of(i) || i == table.len() - 1);
        }
    }
}
