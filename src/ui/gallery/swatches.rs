// SPDX-License-Identifier: MPL-2.0
//! Metal color swatches of a product card.

use super::component::Message;
use crate::domain::catalog::Variant;
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, tooltip, Column, Row, Text};
use iced::{Color, Element, Length};

/// Fill color of a variant swatch.
#[must_use]
pub fn swatch_color(variant: &Variant) -> Color {
    match variant {
        Variant::Yellow => palette::YELLOW_GOLD,
        Variant::White => palette::WHITE_GOLD,
        Variant::Rose => palette::ROSE_GOLD,
        Variant::Custom(_) => palette::GRAY_200,
    }
}

/// One swatch per offered variant, followed by the selected variant's name.
pub fn view<'a>(product_name: &'a str, selected: &Variant, i18n: &'a I18n) -> Element<'a, Message> {
    let swatches = Variant::OFFERED.iter().fold(
        Row::new().spacing(spacing::XS),
        |row, variant| {
            let is_selected = variant == selected;
            let swatch = button(Text::new(""))
                .width(Length::Fixed(sizing::SWATCH))
                .height(Length::Fixed(sizing::SWATCH))
                .padding(0)
                .style(styles::button::swatch(swatch_color(variant), is_selected))
                .on_press(Message::VariantSelected {
                    product: product_name.to_string(),
                    variant: variant.clone(),
                });

            row.push(styles::tooltip::styled(
                swatch,
                i18n.tr(variant.label_key()),
                tooltip::Position::Top,
            ))
        },
    );

    Column::new()
        .spacing(spacing::XXS)
        .push(swatches)
        .push(
            Text::new(i18n.tr(selected.label_key()))
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        )
        .into()
}
