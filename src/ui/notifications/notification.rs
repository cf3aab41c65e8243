// SPDX-License-Identifier: MPL-2.0
//! A single toast: what to say, how loud, and what to record.

use crate::diagnostics::{ErrorType, WarningType};
use crate::ui::design_tokens::palette;
use iced::Color;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// A fetch recovered.
    Success,
    /// Settings fell back to defaults.
    Warning,
    /// The product list could not be loaded. Stays until dismissed.
    Error,
}

impl Severity {
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Severity::Success => "✓",
            Severity::Warning | Severity::Error => "!",
        }
    }

    /// How long a toast stays on screen once shown; `None` means until
    /// dismissed.
    #[must_use]
    pub fn lifetime(self) -> Option<Duration> {
        match self {
            Severity::Success => Some(Duration::from_secs(3)),
            Severity::Warning => Some(Duration::from_secs(5)),
            Severity::Error => None,
        }
    }
}

/// Toast content. The text is an i18n key resolved when drawn, so a toast
/// follows the active language.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    message_key: String,
    message_args: Vec<(String, String)>,
    warning_type: Option<WarningType>,
    error_type: Option<ErrorType>,
}

impl Notification {
    fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            id: NotificationId::next(),
            severity,
            message_key: message_key.into(),
            message_args: Vec::new(),
            warning_type: None,
            error_type: None,
        }
    }

    pub fn success(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Success, message_key)
    }

    pub fn warning(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message_key)
    }

    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Error, message_key)
    }

    /// Adds a Fluent argument, e.g. `("status", "503")`.
    #[must_use]
    pub fn with_arg(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.message_args.push((name.into(), value.into()));
        self
    }

    #[must_use]
    pub fn with_warning_type(mut self, warning_type: WarningType) -> Self {
        self.warning_type = Some(warning_type);
        self
    }

    #[must_use]
    pub fn with_error_type(mut self, error_type: ErrorType) -> Self {
        self.error_type = Some(error_type);
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    #[must_use]
    pub fn message_args(&self) -> &[(String, String)] {
        &self.message_args
    }

    #[must_use]
    pub fn warning_type(&self) -> Option<WarningType> {
        self.warning_type
    }

    #[must_use]
    pub fn error_type(&self) -> Option<ErrorType> {
        self.error_type
    }
}
