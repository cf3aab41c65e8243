// SPDX-License-Identifier: MPL-2.0
//! Star row with its numeric label.

use super::component::Message;
use crate::domain::rating::{StarGlyph, StarRating};
use crate::ui::design_tokens::{opacity, palette, spacing, typography};
use iced::widget::{Row, Text};
use iced::{alignment, Color, Element};

/// Color of one star slot. The half star is a dimmed full star.
#[must_use]
pub fn glyph_color(glyph: StarGlyph) -> Color {
    match glyph {
        StarGlyph::Full => palette::STAR,
        StarGlyph::Half => Color {
            a: opacity::DIMMED,
            ..palette::STAR
        },
        StarGlyph::Empty => palette::GRAY_400,
    }
}

pub fn view<'a>(rating: StarRating) -> Element<'a, Message> {
    let stars = rating.glyphs().into_iter().fold(Row::new(), |row, glyph| {
        row.push(
            Text::new(glyph.as_char().to_string())
                .size(typography::BODY_LG)
                .color(glyph_color(glyph)),
        )
    });

    Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(stars)
        .push(
            Text::new(rating.label())
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        )
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_star_is_dimmed_star_color() {
        let full = glyph_color(StarGlyph::Full);
        let half = glyph_color(StarGlyph::Half);
        assert_eq!(full, palette::STAR);
        assert_eq!(half.r, full.r);
        assert!(half.a < full.a);
    }

    #[test]
    fn empty_star_is_gray() {
        assert_eq!(glyph_color(StarGlyph::Empty), palette::GRAY_400);
    }
}
