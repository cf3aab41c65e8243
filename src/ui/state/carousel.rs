// SPDX-License-Identifier: MPL-2.0
//! Carousel paging state.
//!
//! Tracks the index of the first visible slide. The number of visible slides
//! follows the viewport width, and the start index is clamped whenever the
//! slide count or the per-view count changes so the last page stays full.

use crate::domain::ui::SlidesPerView;
use std::ops::Range;

/// Horizontal space between two slides, in logical pixels.
pub const SLIDE_SPACING: f32 = 24.0;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CarouselState {
    len: usize,
    per_view: SlidesPerView,
    start: usize,
}

impl CarouselState {
    /// Sets the number of slides and clamps the start index.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        self.clamp_start();
    }

    /// Updates the per-view count from the viewport width.
    ///
    /// Returns true when the per-view count changed.
    pub fn set_viewport_width(&mut self, width: f32) -> bool {
        let per_view = SlidesPerView::for_width(width);
        let changed = per_view != self.per_view;
        self.per_view = per_view;
        self.clamp_start();
        changed
    }

    /// Moves forward one slide. Returns false at the end.
    pub fn next(&mut self) -> bool {
        if self.start < self.max_start() {
            self.start += 1;
            true
        } else {
            false
        }
    }

    /// Moves back one slide. Returns false at the start.
    pub fn previous(&mut self) -> bool {
        if self.start > 0 {
            self.start -= 1;
            true
        } else {
            false
        }
    }

    /// Jumps to a start position, clamped to the reachable range.
    pub fn go_to(&mut self, index: usize) {
        self.start = index.min(self.max_start());
    }

    #[must_use]
    pub fn start(&self) -> usize {
        self.start
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn per_view(&self) -> usize {
        self.per_view.value()
    }

    /// One bullet per reachable start position, at least one.
    #[must_use]
    pub fn bullet_count(&self) -> usize {
        self.max_start() + 1
    }

    /// Indices of the slides currently on screen.
    #[must_use]
    pub fn visible_range(&self) -> Range<usize> {
        self.start..(self.start + self.per_view()).min(self.len)
    }

    #[must_use]
    pub fn can_go_previous(&self) -> bool {
        self.start > 0
    }

    #[must_use]
    pub fn can_go_next(&self) -> bool {
        self.start < self.max_start()
    }

    fn max_start(&self) -> usize {
        self.len.saturating_sub(self.per_view())
    }

    fn clamp_start(&mut self) {
        self.start = self.start.min(self.max_start());
    }
}
