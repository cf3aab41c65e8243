// SPDX-License-Identifier: MPL-2.0
//! Toast queue.
//!
//! At most [`MAX_VISIBLE`] toasts are on screen; later ones wait their turn.
//! A toast's lifetime counts from the moment it is shown, not from when it
//! was pushed. Warnings and errors are also forwarded to diagnostics.

use super::notification::{Notification, NotificationId, Severity};
use crate::diagnostics::{DiagnosticsHandle, ErrorEvent, ErrorType, WarningEvent, WarningType};
use std::collections::VecDeque;
use std::time::Instant;

const MAX_VISIBLE: usize = 3;

/// Message key prefix shared by product list failures.
const CATALOG_ERROR_PREFIX: &str = "notification-catalog-";

#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(NotificationId),
}

#[derive(Debug)]
struct Shown {
    notification: Notification,
    since: Instant,
}

impl Shown {
    fn expired(&self, now: Instant) -> bool {
        self.notification
            .severity()
            .lifetime()
            .is_some_and(|lifetime| now.saturating_duration_since(self.since) >= lifetime)
    }
}

#[derive(Debug, Default)]
pub struct Manager {
    /// On screen, oldest first.
    shown: Vec<Shown>,
    waiting: VecDeque<Notification>,
    diagnostics: Option<DiagnosticsHandle>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    pub fn push(&mut self, notification: Notification) {
        self.record(&notification);
        self.waiting.push_back(notification);
        self.fill(Instant::now());
    }

    fn record(&self, notification: &Notification) {
        let Some(handle) = &self.diagnostics else {
            return;
        };
        let key = notification.message_key();
        match notification.severity() {
            Severity::Warning => handle.log_warning(WarningEvent::new(
                notification.warning_type().unwrap_or(WarningType::Other),
                key,
            )),
            Severity::Error => handle.log_error(ErrorEvent::new(
                notification.error_type().unwrap_or(ErrorType::Other),
                key,
            )),
            Severity::Success => {}
        }
    }

    /// Moves waiting toasts on screen while there is room.
    fn fill(&mut self, now: Instant) {
        while self.shown.len() < MAX_VISIBLE {
            let Some(notification) = self.waiting.pop_front() else {
                break;
            };
            self.shown.push(Shown {
                notification,
                since: now,
            });
        }
    }

    /// Returns `true` if a toast with this id was on screen or waiting.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let before = self.shown.len() + self.waiting.len();
        self.shown.retain(|entry| entry.notification.id() != id);
        self.waiting.retain(|notification| notification.id() != id);
        let removed = self.shown.len() + self.waiting.len() < before;
        self.fill(Instant::now());
        removed
    }

    /// Drops toasts whose lifetime ran out by `now` and shows waiting ones.
    pub fn tick(&mut self, now: Instant) {
        self.shown.retain(|entry| !entry.expired(now));
        self.fill(now);
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
        }
    }

    /// Toasts on screen, oldest first.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.shown.iter().map(|entry| &entry.notification)
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.shown.is_empty() || !self.waiting.is_empty()
    }

    /// Removes product list failures once a later fetch succeeds.
    ///
    /// Returns `true` if any were on screen or waiting.
    pub fn clear_catalog_errors(&mut self) -> bool {
        let is_catalog_error = |notification: &Notification| {
            notification.severity() == Severity::Error
                && notification.message_key().starts_with(CATALOG_ERROR_PREFIX)
        };

        let before = self.shown.len() + self.waiting.len();
        self.shown.retain(|entry| !is_catalog_error(&entry.notification));
        self.waiting.retain(|notification| !is_catalog_error(notification));
        let removed = self.shown.len() + self.waiting.len() < before;
        self.fill(Instant::now());
        removed
    }
}
