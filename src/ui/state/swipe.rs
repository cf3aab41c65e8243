// SPDX-License-Identifier: MPL-2.0
//! Swipe gesture state
//!
//! Turns pointer drags and wheel scrolling over the carousel into one-slide
//! paging steps.

use iced::mouse::ScrollDelta;
use iced::Point;

/// Horizontal drag distance, in logical pixels, needed to page.
pub const SWIPE_THRESHOLD: f32 = 50.0;

/// Pixel scroll distance accumulated before paging (trackpads).
pub const WHEEL_PIXEL_THRESHOLD: f32 = 50.0;

/// Paging direction produced by a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Show later slides.
    Forward,
    /// Show earlier slides.
    Backward,
}

/// Manages swipe and wheel state
#[derive(Debug, Clone, Default)]
pub struct SwipeState {
    /// Whether the left button is held over the carousel
    pub is_dragging: bool,

    /// Position where the drag started
    pub start_position: Option<Point>,

    /// Most recent cursor position during the drag
    pub last_position: Option<Point>,

    wheel_accumulator: f32,
}

impl SwipeState {
    /// Starts a drag at the cursor position
    pub fn start(&mut self, position: Point) {
        self.is_dragging = true;
        self.start_position = Some(position);
        self.last_position = Some(position);
    }

    /// Records cursor movement. Ignored when no drag is active.
    pub fn track(&mut self, position: Point) {
        if self.is_dragging {
            self.last_position = Some(position);
        }
    }

    /// Ends the drag and returns the paging direction, if the gesture was a
    /// mostly horizontal movement past [`SWIPE_THRESHOLD`].
    ///
    /// Dragging to the left pages forward.
    pub fn finish(&mut self) -> Option<SwipeDirection> {
        let direction = self.direction();
        self.cancel();
        direction
    }

    /// Abandons the drag without paging
    pub fn cancel(&mut self) {
        self.is_dragging = false;
        self.start_position = None;
        self.last_position = None;
    }

    fn direction(&self) -> Option<SwipeDirection> {
        if !self.is_dragging {
            return None;
        }
        let start = self.start_position?;
        let last = self.last_position?;

        let delta_x = last.x - start.x;
        let delta_y = last.y - start.y;
        if delta_x.abs() <= SWIPE_THRESHOLD || delta_x.abs() < delta_y.abs() {
            return None;
        }

        Some(if delta_x < 0.0 {
            SwipeDirection::Forward
        } else {
            SwipeDirection::Backward
        })
    }

    /// Converts a wheel event into a paging step.
    ///
    /// A line-based notch pages once. Pixel deltas accumulate until they pass
    /// [`WHEEL_PIXEL_THRESHOLD`]. The dominant axis decides; scrolling down
    /// or left pages forward.
    pub fn wheel(&mut self, delta: ScrollDelta) -> Option<SwipeDirection> {
        match delta {
            ScrollDelta::Lines { x, y } => {
                self.wheel_accumulator = 0.0;
                direction_from_amount(dominant(x, y))
            }
            ScrollDelta::Pixels { x, y } => {
                self.wheel_accumulator += dominant(x, y);
                if self.wheel_accumulator.abs() < WHEEL_PIXEL_THRESHOLD {
                    return None;
                }
                let amount = self.wheel_accumulator;
                self.wheel_accumulator = 0.0;
                direction_from_amount(amount)
            }
        }
    }
}

fn dominant(x: f32, y: f32) -> f32 {
    if x.abs() > y.abs() {
        x
    } else {
        y
    }
}

fn direction_from_amount(amount: f32) -> Option<SwipeDirection> {
    if amount < 0.0 {
        Some(SwipeDirection::Forward)
    } else if amount > 0.0 {
        Some(SwipeDirection::Backward)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_not_dragging() {
        let state = SwipeState::default();
        assert!(!state.is_dragging);
        assert!(state.start_position.is_none());
    }

    #[test]
    fn drag_left_past_threshold_pages_forward() {
        let mut state = SwipeState::default();
        state.start(Point::new(300.0, 100.0));
        state.track(Point::new(220.0, 110.0));
        assert_eq!(state.finish(), Some(SwipeDirection::Forward));
        assert!(!state.is_dragging);
    }

    #[test]
    fn drag_right_past_threshold_pages_backward() {
        let mut state = SwipeState::default();
        state.start(Point::new(100.0, 100.0));
        state.track(Point::new(180.0, 100.0));
        assert_eq!(state.finish(), Some(SwipeDirection::Backward));
    }

    #[test]
    fn short_or_vertical_drag_does_not_page() {
        let mut state = SwipeState::default();
        state.start(Point::new(100.0, 100.0));
        state.track(Point::new(140.0, 100.0));
        assert_eq!(state.finish(), None);

        state.start(Point::new(100.0, 100.0));
        state.track(Point::new(170.0, 250.0));
        assert_eq!(state.finish(), None);
    }

    #[test]
    fn tracking_without_drag_is_ignored() {
        let mut state = SwipeState::default();
        state.track(Point::new(10.0, 10.0));
        assert!(state.last_position.is_none());
        assert_eq!(state.finish(), None);
    }

    #[test]
    fn one_wheel_notch_pages_once() {
        let mut state = SwipeState::default();
        assert_eq!(
            state.wheel(ScrollDelta::Lines { x: 0.0, y: -1.0 }),
            Some(SwipeDirection::Forward)
        );
        assert_eq!(
            state.wheel(ScrollDelta::Lines { x: 1.0, y: 0.0 }),
            Some(SwipeDirection::Backward)
        );
    }

    #[test]
    fn pixel_scrolling_accumulates() {
        let mut state = SwipeState::default();
        assert_eq!(state.wheel(ScrollDelta::Pixels { x: 0.0, y: -30.0 }), None);
        assert_eq!(
            state.wheel(ScrollDelta::Pixels { x: 0.0, y: -30.0 }),
            Some(SwipeDirection::Forward)
        );
        assert_eq!(state.wheel(ScrollDelta::Pixels { x: 0.0, y: -30.0 }), None);
    }
}
