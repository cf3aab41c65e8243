// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Toasts tell the user that the product list failed to load or that
//! settings fell back to defaults, without blocking the gallery.
//!
//! # Components
//!
//! - [`notification`] - `Notification` with severity levels
//! - [`manager`] - `Manager` for queuing and lifecycle
//! - [`toast`] - Toast overlay
//!
//! Success toasts last 3s and warnings 5s from when they appear; errors stay
//! until dismissed. At most 3 are visible; the rest wait in a queue.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::overlay;
