// Maps the scroll offset to a discrete section index and detects changes.

/// Tracks which page section the viewport is closest to.
///
/// Updated only when scroll events are drained, never on a per-frame basis.
/// Rounding is `f32::round` (half away from zero), so an offset of exactly
/// half a viewport lands in the next section.
#[derive(Clone, Copy, Debug)]
pub struct SectionTracker {
    current: usize,
    count: usize,
}

impl SectionTracker {
    pub fn new(count: usize) -> Self {
        Self { current: 0, count }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// Feed a scroll offset. Returns the new index only when it differs from
    /// the stored one; repeated observations of the same offset are silent.
    ///
    /// Indices past the last section clamp to it, so scrolling beyond the
    /// page never yields an out-of-range index. A degenerate viewport height
    /// is ignored.
    pub fn observe(&mut self, offset_y: f32, viewport_h: f32) -> Option<usize> {
        if viewport_h <= 0.0 || self.count == 0 {
            return None;
        }
        let raw = (offset_y.max(0.0) / viewport_h).round() as usize;
        let candidate = raw.min(self.count - 1);
        if candidate != self.current {
            self.current = candidate;
            Some(candidate)
        } else {
            None
        }
    }
}
