//! Infinite-scroll trigger.
//!
//! A boundary-proximity observer independent of the windowing math. It
//! watches the end-of-content sentinel relative to the viewport and raises
//! a load-more signal exactly once per approach, gated by host-supplied
//! load state. Retry and backoff after a failed load are host concerns;
//! the trigger only guarantees it never double-fires.

use crate::model::Viewport;

/// Edge-triggered load-more signal for paged content.
///
/// The sentinel is considered visible when the viewport's far edge comes
/// within `threshold` of the total content extent. A visible sentinel fires
/// at most once; the trigger re-arms only after the sentinel has left
/// visibility (scrolling away, or content growing past the viewport).
///
/// Gating: [`InfiniteScrollTrigger::observe`] never fires while a load is
/// in flight or after the host signals exhaustion. Observing while loading
/// is a suppressed no-op, not an error.
#[derive(Debug, Clone)]
pub struct InfiniteScrollTrigger {
    threshold: f64,
    has_more: bool,
    is_loading: bool,
    armed: bool,
}

impl InfiniteScrollTrigger {
    /// Create a trigger with the given proximity threshold (content units).
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.max(0.0),
            has_more: true,
            is_loading: false,
            armed: true,
        }
    }

    /// Whether the host has signalled more content is available.
    pub fn has_more(&self) -> bool {
        self.has_more
    }

    /// Whether a load is currently in flight.
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Record that the host started a load.
    ///
    /// Usually called right after [`InfiniteScrollTrigger::observe`]
    /// returned `true`.
    pub fn loading_started(&mut self) {
        self.is_loading = true;
    }

    /// Record that the host's load finished.
    ///
    /// `has_more = false` marks the sequence as exhausted; the trigger
    /// never fires again until the host flips it back (e.g. after a
    /// refresh).
    pub fn loading_finished(&mut self, has_more: bool) {
        self.is_loading = false;
        self.has_more = has_more;
    }

    /// Reset exhaustion, e.g. when the host swaps in a fresh sequence.
    pub fn reset(&mut self) {
        self.has_more = true;
        self.is_loading = false;
        self.armed = true;
    }

    /// Observe the current geometry; returns `true` when the host should
    /// load more.
    ///
    /// Fires iff the sentinel is visible, the trigger is armed, more
    /// content exists, and no load is in flight. Firing disarms the
    /// trigger; leaving the sentinel zone re-arms it.
    pub fn observe(&mut self, viewport: Viewport, total_extent: f64) -> bool {
        let sentinel_visible =
            total_extent > 0.0 && total_extent - viewport.end_offset() <= self.threshold;

        if !sentinel_visible {
            self.armed = true;
            return false;
        }
        if !self.armed || !self.has_more || self.is_loading {
            return false;
        }
        self.armed = false;
        true
    }
}
