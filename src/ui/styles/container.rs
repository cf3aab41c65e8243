// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Theme};

/// Product card surface.
///
/// Derived from the active theme so cards stay readable in both modes.
pub fn card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        text_color: Some(palette.background.base.text),
        border: Border {
            color: palette.background.strong.color,
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow: shadow::CARD,
        ..Default::default()
    }
}

/// Area drawn in place of a missing or failed card image.
pub fn image_placeholder(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        text_color: Some(palette.background.weak.text),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
