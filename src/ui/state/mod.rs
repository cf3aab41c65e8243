// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! State logic kept apart from widgets so it can be tested without a window.

pub mod carousel;
pub mod selection;
pub mod swipe;

pub use carousel::{CarouselState, SLIDE_SPACING};
pub use selection::SelectionState;
pub use swipe::{SwipeDirection, SwipeState};
