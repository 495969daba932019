use crate::{foundation::core::Viewport, scroll::binder::ScrollSample};

/// Collapses bursts of scroll and resize notifications into at most one sample per frame.
///
/// Raw input only records the latest value; [`ScrollCoalescer::take`] is called once per frame by
/// the page loop.
#[derive(Clone, Debug)]
pub struct ScrollCoalescer {
    scroll_y: f64,
    viewport: Viewport,
    dirty: bool,
    resized: bool,
    received: u64,
}

impl ScrollCoalescer {
    /// Start dirty so the first frame measures every binding.
    pub fn new(scroll_y: f64, viewport: Viewport) -> Self {
        Self {
            scroll_y: scroll_y.max(0.0),
            viewport,
            dirty: true,
            resized: true,
            received: 0,
        }
    }

    /// Record a scroll notification. Negative or non-finite offsets clamp to 0.
    pub fn push_scroll(&mut self, scroll_y: f64) {
        self.received += 1;
        let y = if scroll_y.is_finite() { scroll_y.max(0.0) } else { 0.0 };
        if y != self.scroll_y {
            self.scroll_y = y;
            self.dirty = true;
        }
    }

    /// Record a resize notification.
    pub fn push_resize(&mut self, viewport: Viewport) {
        self.received += 1;
        if viewport != self.viewport {
            self.viewport = viewport;
            self.dirty = true;
            self.resized = true;
        }
    }

    /// Latest scroll offset, whether or not it was taken.
    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    /// Latest viewport.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Raw notifications recorded so far.
    pub fn received(&self) -> u64 {
        self.received
    }

    /// Return the pending sample, if anything changed since the last call.
    pub fn take(&mut self) -> Option<ScrollSample> {
        if !self.dirty {
            return None;
        }
        let sample = ScrollSample {
            scroll_y: self.scroll_y,
            viewport: self.viewport,
            resized: self.resized,
        };
        self.dirty = false;
        self.resized = false;
        Some(sample)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/coalesce.rs"]
mod tests;
