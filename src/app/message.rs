// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::gallery;
use crate::ui::notifications;
use iced::{window, Size};
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery::Message),
    Notification(notifications::NotificationMessage),
    /// Periodic tick for toast auto-dismiss and diagnostics draining.
    Tick(Instant),
    /// Window opened or resized.
    WindowResized(Size),
    /// The user asked to close the window; the diagnostics report is saved
    /// before it closes.
    WindowCloseRequested(window::Id),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional product API base URL.
    /// Takes precedence over `PRODUCT_SHOWCASE_API_BASE` and `settings.toml`.
    pub api_base: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `PRODUCT_SHOWCASE_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
