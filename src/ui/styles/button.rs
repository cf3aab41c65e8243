// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action (Retry).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, border_color, shadow) = match status {
        button::Status::Hovered => (palette::PRIMARY_400, palette::PRIMARY_500, shadow::MD),
        button::Status::Disabled => (palette::GRAY_200, palette::GRAY_400, shadow::NONE),
        button::Status::Active | button::Status::Pressed => {
            (palette::PRIMARY_500, palette::PRIMARY_600, shadow::CARD)
        }
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: border_color,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow,
        snap: true,
    }
}

/// Round previous/next button beside the carousel.
///
/// Disabled at either end of the carousel.
pub fn carousel_nav(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let base = palette.background.weak.color;

    let (background, text_color) = match status {
        button::Status::Hovered => (palette.background.strong.color, palette.background.base.text),
        button::Status::Disabled => (
            Color {
                a: opacity::DIMMED,
                ..base
            },
            Color {
                a: opacity::DIMMED,
                ..palette.background.base.text
            },
        ),
        button::Status::Active | button::Status::Pressed => (base, palette.background.base.text),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: radius::FULL.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Circular metal swatch. The selected swatch gets a ring in the text color.
pub fn swatch(color: Color, selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let text = theme.extended_palette().background.base.text;
        let ring = if selected {
            Border {
                color: text,
                width: border::WIDTH_MD,
                radius: radius::FULL.into(),
            }
        } else if matches!(status, button::Status::Hovered) {
            Border {
                color: Color {
                    a: opacity::DIMMED,
                    ..text
                },
                width: border::WIDTH_SM,
                radius: radius::FULL.into(),
            }
        } else {
            Border {
                color: Color::TRANSPARENT,
                width: border::WIDTH_SM,
                radius: radius::FULL.into(),
            }
        };

        button::Style {
            background: Some(Background::Color(color)),
            text_color: text,
            border: ring,
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Pagination bullet. The active bullet is filled with the brand color.
pub fn bullet(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let inactive = theme.extended_palette().background.strong.color;
        let color = match (active, status) {
            (true, _) => palette::PRIMARY_500,
            (false, button::Status::Hovered) => palette::PRIMARY_400,
            (false, _) => inactive,
        };

        button::Style {
            background: Some(Background::Color(color)),
            text_color: color,
            border: Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: radius::FULL.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}
