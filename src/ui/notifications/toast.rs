// SPDX-License-Identifier: MPL-2.0
//! Toast rendering.

use super::manager::{Manager, Message};
use super::notification::Notification;
use crate::i18n::I18n;
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, text, tooltip, Column, Container, Row, Space, Text};
use iced::{alignment, Background, Border, Color, Element, Length, Theme};

/// Visible toasts stacked in the bottom-right corner, newest at the bottom.
pub fn overlay<'a>(manager: &'a Manager, i18n: &'a I18n) -> Element<'a, Message> {
    if !manager.has_notifications() {
        return Space::new().into();
    }

    let toasts = manager.visible().map(|notification| toast(notification, i18n));
    let column = Column::with_children(toasts)
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Right);

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Bottom)
        .padding(spacing::MD)
        .into()
}

fn message_text(notification: &Notification, i18n: &I18n) -> String {
    let args: Vec<(&str, &str)> = notification
        .message_args()
        .iter()
        .map(|(name, value)| (name.as_str(), value.as_str()))
        .collect();
    i18n.tr_with_args(notification.message_key(), &args)
}

fn toast<'a>(notification: &'a Notification, i18n: &'a I18n) -> Element<'a, Message> {
    let accent = notification.severity().color();

    let glyph = Text::new(notification.severity().glyph())
        .size(typography::BODY_LG)
        .style(move |_: &Theme| text::Style {
            color: Some(accent),
        });

    let dismiss = styles::tooltip::styled(
        button(Text::new("✕").size(typography::CAPTION))
            .on_press(Message::Dismiss(notification.id()))
            .padding(spacing::XXS)
            .style(dismiss_style),
        i18n.tr("notification-dismiss"),
        tooltip::Position::Left,
    );

    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(glyph)
        .push(
            Text::new(message_text(notification, i18n))
                .size(typography::BODY)
                .width(Length::Fill),
        )
        .push(dismiss);

    Container::new(row)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(move |theme: &Theme| card_style(theme, accent))
        .into()
}

fn card_style(theme: &Theme, accent: Color) -> container::Style {
    let background = theme.extended_palette().background.base;
    container::Style {
        background: Some(Background::Color(background.color)),
        text_color: Some(background.text),
        border: Border {
            color: accent,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        ..container::Style::default()
    }
}

fn dismiss_style(theme: &Theme, status: button::Status) -> button::Style {
    let hover_alpha = match status {
        button::Status::Hovered => Some(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => Some(opacity::DIMMED),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background: hover_alpha.map(|a| Background::Color(Color { a, ..palette::GRAY_400 })),
        text_color: theme.extended_palette().background.base.text,
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::Config;

    #[test]
    fn toast_border_takes_the_severity_color() {
        let style = card_style(&Theme::Dark, palette::ERROR_500);
        assert_eq!(style.border.color, palette::ERROR_500);
        assert!(style.background.is_some());
    }

    #[test]
    fn dismiss_button_shows_background_only_on_interaction() {
        assert!(dismiss_style(&Theme::Light, button::Status::Active)
            .background
            .is_none());
        assert!(dismiss_style(&Theme::Light, button::Status::Pressed)
            .background
            .is_some());
    }

    #[test]
    fn status_argument_is_interpolated() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        let notification =
            Notification::error("notification-catalog-status-error").with_arg("status", "503");
        assert_eq!(
            message_text(&notification, &i18n),
            "The product server answered with status 503."
        );
    }
}
