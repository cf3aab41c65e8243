// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for UI values,
//! ensuring they are always within valid ranges.

// =============================================================================
// Carousel Breakpoints
// =============================================================================

/// Slides-per-view bounds and the width breakpoints that select them.
pub mod slides_bounds {
    /// Slides shown below the first breakpoint.
    pub const MIN: usize = 1;
    /// Slides shown at and above the widest breakpoint.
    pub const MAX: usize = 4;
    /// `(minimum viewport width, slides per view)`, narrowest first.
    pub const BREAKPOINTS: [(f32, usize); 3] = [(640.0, 2), (768.0, 3), (1024.0, 4)];
}

// =============================================================================
// SlidesPerView
// =============================================================================

/// Number of carousel cards visible at once, always within 1–4.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlidesPerView(usize);

impl SlidesPerView {
    /// Creates a new value, clamping to the valid range.
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self(count.clamp(slides_bounds::MIN, slides_bounds::MAX))
    }

    /// Picks the count for a viewport width using the breakpoints.
    ///
    /// Non-finite widths fall back to a single slide.
    #[must_use]
    pub fn for_width(width: f32) -> Self {
        let count = slides_bounds::BREAKPOINTS
            .iter()
            .rev()
            .find(|(min_width, _)| width >= *min_width)
            .map_or(slides_bounds::MIN, |(_, count)| *count);
        Self::new(count)
    }

    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for SlidesPerView {
    fn default() -> Self {
        Self(slides_bounds::MIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_viewport_shows_one_slide() {
        assert_eq!(SlidesPerView::for_width(320.0).value(), 1);
        assert_eq!(SlidesPerView::for_width(639.9).value(), 1);
    }

    #[test]
    fn breakpoints_are_inclusive() {
        assert_eq!(SlidesPerView::for_width(640.0).value(), 2);
        assert_eq!(SlidesPerView::for_width(768.0).value(), 3);
        assert_eq!(SlidesPerView::for_width(1024.0).value(), 4);
        assert_eq!(SlidesPerView::for_width(2560.0).value(), 4);
    }

    #[test]
    fn nan_width_falls_back_to_one_slide() {
        assert_eq!(SlidesPerView::for_width(f32::NAN).value(), 1);
    }

    #[test]
    fn new_clamps_to_bounds() {
        assert_eq!(SlidesPerView::new(0).value(), 1);
        assert_eq!(SlidesPerView::new(9).value(), 4);
    }
}
