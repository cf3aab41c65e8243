// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Window size changes and close requests always reach the application.
//! Arrow keys page the carousel unless a widget already captured them.

use super::Message;
use crate::ui::gallery;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, window, Event, Subscription};
use std::time::Duration;

/// Tick period while toasts are showing or the product list is loading.
const FAST_TICK: Duration = Duration::from_millis(100);

/// Tick period otherwise; only drains diagnostics.
const IDLE_TICK: Duration = Duration::from_secs(1);

pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(route_event)
}

/// The window manager may open the window at a size other than the one
/// requested, so `Opened` is treated like a resize.
fn route_event(event: Event, status: event::Status, window_id: window::Id) -> Option<Message> {
    match event {
        Event::Window(window::Event::Opened { size, .. } | window::Event::Resized(size)) => {
            Some(Message::WindowResized(size))
        }
        Event::Window(window::Event::CloseRequested) => {
            Some(Message::WindowCloseRequested(window_id))
        }
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(named),
            ..
        }) if matches!(status, event::Status::Ignored) => arrow_key_message(named),
        _ => None,
    }
}

/// Maps Left/Right arrows to carousel paging.
fn arrow_key_message(key: Named) -> Option<Message> {
    match key {
        Named::ArrowLeft => Some(Message::Gallery(gallery::Message::PreviousSlide)),
        Named::ArrowRight => Some(Message::Gallery(gallery::Message::NextSlide)),
        _ => None,
    }
}

/// Creates the periodic tick subscription.
pub fn create_tick_subscription(is_loading: bool, has_notifications: bool) -> Subscription<Message> {
    let period = if is_loading || has_notifications {
        FAST_TICK
    } else {
        IDLE_TICK
    };
    time::every(period).map(Message::Tick)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_page_the_carousel() {
        assert!(matches!(
            arrow_key_message(Named::ArrowRight),
            Some(Message::Gallery(gallery::Message::NextSlide))
        ));
        assert!(matches!(
            arrow_key_message(Named::ArrowLeft),
            Some(Message::Gallery(gallery::Message::PreviousSlide))
        ));
        assert!(arrow_key_message(Named::ArrowUp).is_none());
    }

    #[test]
    fn opened_window_reports_its_actual_size() {
        let opened = Event::Window(window::Event::Opened {
            position: None,
            size: iced::Size::new(600.0, 800.0),
        });
        let message = route_event(opened, event::Status::Ignored, window::Id::unique());
        assert!(matches!(
            message,
            Some(Message::WindowResized(size)) if size.width == 600.0
        ));
    }

    #[test]
    fn close_request_names_the_window() {
        let id = window::Id::unique();
        let message = route_event(
            Event::Window(window::Event::CloseRequested),
            event::Status::Ignored,
            id,
        );
        assert!(matches!(message, Some(Message::WindowCloseRequested(closing)) if closing == id));
    }
}
