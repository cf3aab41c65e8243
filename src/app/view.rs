// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The gallery fills the window; toasts are stacked above it.

use super::Message;
use crate::i18n::I18n;
use crate::ui::gallery;
use crate::ui::notifications::{self, Manager};
use iced::widget::{stack, Container};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a gallery::State,
    pub notifications: &'a Manager,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let content = Container::new(
        gallery::view(ctx.gallery, gallery::ViewContext { i18n: ctx.i18n }).map(Message::Gallery),
    )
    .width(Length::Fill)
    .height(Length::Fill);

    let toasts = notifications::overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    stack![content, toasts].into()
}
