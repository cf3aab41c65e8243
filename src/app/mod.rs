// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration around the product gallery.
//!
//! The `App` struct wires together the gallery, localization, notifications
//! and diagnostics, and translates gallery effects into HTTP tasks. Startup
//! policy (window size, API base resolution, config fallback) lives here so
//! it is easy to audit user-facing behavior.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use update::catalog_failure_notification;

use crate::diagnostics::{DiagnosticsCollector, WarningType};
use crate::i18n::I18n;
use crate::infrastructure::CatalogClient;
use crate::ui::gallery;
use crate::ui::notifications;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// File name of the diagnostics report written next to `settings.toml`.
pub const DIAGNOSTICS_REPORT_FILE: &str = "diagnostics.json";

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    gallery: gallery::State,
    notifications: notifications::Manager,
    diagnostics: DiagnosticsCollector,
    client: CatalogClient,
    theme_mode: ThemeMode,
    /// Where the diagnostics report goes on close; `None` skips writing it.
    report_path: Option<PathBuf>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("products_url", &self.client.products_url())
            .field("load_state", self.gallery.load_state())
            .field("products", &self.gallery.products().len())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(config::DEFAULT_WINDOW_WIDTH, config::DEFAULT_WINDOW_HEIGHT),
        min_size: Some(iced::Size::new(
            config::MIN_WINDOW_WIDTH,
            config::MIN_WINDOW_HEIGHT,
        )),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; flags are consumed on first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads config and translations, then requests the product list.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir.clone());

        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);
        let api_base = config::resolve_api_base_from_env(flags.api_base.as_deref(), &config.catalog);
        let client = CatalogClient::new(&api_base, config.catalog.request_timeout());

        let mut app = Self::with_client(i18n, client, config.general.theme_mode);
        app.report_path =
            paths::get_app_config_dir().map(|dir| dir.join(DIAGNOSTICS_REPORT_FILE));

        if let Some(key) = config_warning {
            app.notifications.push(
                notifications::Notification::warning(key)
                    .with_warning_type(WarningType::ConfigurationIssue),
            );
        }

        let effect = app.gallery.request_products();
        let task = update::apply_effect(&mut app.update_context(), effect);
        (app, task)
    }

    /// Builds an idle application around an existing client.
    fn with_client(i18n: I18n, client: CatalogClient, theme_mode: ThemeMode) -> Self {
        let diagnostics = DiagnosticsCollector::default();
        let mut gallery = gallery::State::new();
        gallery.set_diagnostics(diagnostics.handle());
        let _ = gallery.handle_message(gallery::Message::ViewportResized(
            config::DEFAULT_WINDOW_WIDTH,
        ));
        let mut notifications = notifications::Manager::new();
        notifications.set_diagnostics(diagnostics.handle());

        Self {
            i18n,
            gallery,
            notifications,
            diagnostics,
            client,
            theme_mode,
            report_path: None,
        }
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            gallery: &mut self.gallery,
            notifications: &mut self.notifications,
            client: &self.client,
        }
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(
                self.gallery.is_loading(),
                self.notifications.has_notifications(),
            ),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Gallery(gallery_message) => {
                update::handle_gallery_message(&mut self.update_context(), gallery_message)
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(now) => {
                self.notifications.tick(now);
                self.diagnostics.process_pending();
                Task::none()
            }
            Message::WindowResized(size) => update::handle_gallery_message(
                &mut self.update_context(),
                gallery::Message::ViewportResized(size.width),
            ),
            Message::WindowCloseRequested(id) => {
                self.save_diagnostics_report();
                window::close(id)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            gallery: &self.gallery,
            notifications: &self.notifications,
        })
    }

    /// Writes the diagnostics log to the report path, if one is set.
    ///
    /// Failures are printed to stderr; closing the window never waits on
    /// them.
    fn save_diagnostics_report(&mut self) -> Option<PathBuf> {
        let path = self.report_path.as_ref()?;
        self.diagnostics.process_pending();
        match self.diagnostics.export_to_file(path) {
            Ok(written) => {
                eprintln!("Diagnostics report written to {}", written.display());
                Some(written)
            }
            Err(err) => {
                eprintln!("Failed to write diagnostics report: {err}");
                None
            }
        }
    }
}
