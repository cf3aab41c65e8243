// SPDX-License-Identifier: MPL-2.0
//! Tooltip styles for swatch labels.
//!
//! The bubble uses the inverse of the window background so the metal name
//! stays readable above light and dark cards alike.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow, spacing, typography};
use iced::widget::{container, tooltip, Container, Text};
use iced::{Background, Border, Color, Element, Theme};

/// Inverted bubble: dark on light themes, light on dark themes.
pub fn bubble(theme: &Theme) -> container::Style {
    let (background, text_color) = if theme.extended_palette().is_dark {
        (palette::GRAY_50, palette::GRAY_900)
    } else {
        (palette::GRAY_900, palette::GRAY_50)
    };

    container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            radius: radius::SM.into(),
            width: border::WIDTH_SM,
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            },
        },
        shadow: shadow::MD,
        text_color: Some(text_color),
        ..Default::default()
    }
}

/// Wraps `content` in a tooltip showing `tip` in a [`bubble`].
pub fn styled<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    tip: impl Into<String>,
    position: tooltip::Position,
) -> tooltip::Tooltip<'a, Message, Theme, iced::Renderer> {
    let tip = Container::new(Text::new(tip.into()).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(bubble);

    tooltip(content, tip, position).gap(spacing::XXS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn background(style: &container::Style) -> Color {
        match style.background {
            Some(Background::Color(color)) => color,
            _ => panic!("expected a color background"),
        }
    }

    #[test]
    fn bubble_inverts_light_theme() {
        let style = bubble(&Theme::Light);
        assert_eq!(background(&style), palette::GRAY_900);
        assert_eq!(style.text_color, Some(palette::GRAY_50));
    }

    #[test]
    fn bubble_inverts_dark_theme() {
        let style = bubble(&Theme::Dark);
        assert_eq!(background(&style), palette::GRAY_50);
        assert_eq!(style.text_color, Some(palette::GRAY_900));
    }
}
