// SPDX-License-Identifier: MPL-2.0
//! Views shown instead of the carousel: loading, failure and empty list.

use super::component::{LoadState, Message};
use crate::error::CatalogError;
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Text};
use iced::{alignment, Element, Length};

/// Message key of the headline for a load state.
#[must_use]
pub fn headline_key(load_state: &LoadState) -> &'static str {
    match load_state {
        LoadState::Idle | LoadState::Loading => "gallery-loading",
        LoadState::Loaded => "gallery-empty",
        LoadState::Failed(_) => "gallery-load-failed",
    }
}

pub fn view<'a>(load_state: &LoadState, i18n: &'a I18n) -> Element<'a, Message> {
    let mut content = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(
            Text::new(i18n.tr(headline_key(load_state)))
                .size(typography::BODY_LG)
                .color(palette::GRAY_400),
        );

    if let LoadState::Failed(error) = load_state {
        let detail = if let CatalogError::Status(status) = error {
            let status = status.to_string();
            i18n.tr_with_args(error.i18n_key(), &[("status", status.as_str())])
        } else {
            i18n.tr(error.i18n_key())
        };
        content = content
            .push(
                Text::new(detail)
                    .size(typography::CAPTION)
                    .color(palette::GRAY_400),
            )
            .push(
                button(Text::new(i18n.tr("retry-button")))
                    .padding([spacing::SM, spacing::LG])
                    .style(styles::button::primary)
                    .on_press(Message::RetryRequested),
            );
    }

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
