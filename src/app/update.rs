// SPDX-License-Identifier: MPL-2.0
//! Update handlers for the application.
//!
//! Gallery effects are turned into HTTP tasks and toasts here, so the gallery
//! itself stays free of I/O.

use super::Message;
use crate::diagnostics::ErrorType;
use crate::error::CatalogError;
use crate::infrastructure::CatalogClient;
use crate::ui::gallery::{self, Effect};
use crate::ui::notifications::{self, Notification};
use iced::Task;
use std::time::Instant;

/// Mutable state the handlers operate on.
pub struct UpdateContext<'a> {
    pub gallery: &'a mut gallery::State,
    pub notifications: &'a mut notifications::Manager,
    pub client: &'a CatalogClient,
}

pub fn handle_gallery_message(ctx: &mut UpdateContext<'_>, message: gallery::Message) -> Task<Message> {
    let (effect, task) = ctx.gallery.handle_message(message);
    let effect_task = apply_effect(ctx, effect);
    Task::batch([task.map(Message::Gallery), effect_task])
}

/// Performs a gallery effect.
pub fn apply_effect(ctx: &mut UpdateContext<'_>, effect: Effect) -> Task<Message> {
    match effect {
        Effect::None => Task::none(),
        Effect::FetchProducts => fetch_products(ctx.client),
        Effect::LoadImages(urls) => load_images(ctx.client, urls),
        Effect::CatalogLoaded {
            product_count,
            images,
        } => {
            if ctx.notifications.clear_catalog_errors() {
                ctx.notifications.push(
                    Notification::success("notification-catalog-loaded")
                        .with_arg("count", product_count.to_string()),
                );
            }
            load_images(ctx.client, images)
        }
        Effect::CatalogFailed(error) => {
            ctx.notifications.push(catalog_failure_notification(&error));
            Task::none()
        }
    }
}

/// Builds the error toast for a failed product list request.
pub fn catalog_failure_notification(error: &CatalogError) -> Notification {
    let notification =
        Notification::error(error.i18n_key()).with_error_type(ErrorType::for_catalog(error));
    match error {
        CatalogError::Status(status) => notification.with_arg("status", status.to_string()),
        CatalogError::Network(_) | CatalogError::Decode(_) => notification,
    }
}

fn fetch_products(client: &CatalogClient) -> Task<Message> {
    Task::perform(client.clone().fetch_products(), |result| {
        Message::Gallery(gallery::Message::ProductsLoaded(result))
    })
}

fn load_images(client: &CatalogClient, urls: Vec<String>) -> Task<Message> {
    if urls.is_empty() {
        return Task::none();
    }

    Task::batch(urls.into_iter().map(|url| {
        let client = client.clone();
        Task::perform(
            async move {
                let started = Instant::now();
                let result = client.fetch_image(url.clone()).await;
                (url, result, started.elapsed())
            },
            |(url, result, elapsed)| {
                #[allow(clippy::cast_possible_truncation)]
                let duration_ms = elapsed.as_millis() as u64;
                Message::Gallery(gallery::Message::ImageLoaded {
                    url,
                    result,
                    duration_ms,
                })
            },
        )
    }))
}
